#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Pet license record and species taxonomy types.
//!
//! This crate defines the canonical record shape for a Seattle pet-license
//! entry and the known species taxonomy used across the pet-map system.
//! The species set in the data is open (the city can license anything);
//! [`Species`] covers the four categories the map knows how to style.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The four known pet species categories.
///
/// Variant order is the legend/display order used by the frontend
/// (dogs first, then cats, goats, pigs). Parsing is exact and
/// case-sensitive: `"Dog"` parses, `"dog"` does not; license data uses
/// the capitalized form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Species {
    /// Licensed dogs.
    Dog,
    /// Licensed cats.
    Cat,
    /// Licensed goats (yes, Seattle licenses goats).
    Goat,
    /// Licensed miniature pigs.
    Pig,
}

impl Species {
    /// Returns all known species in legend/display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Dog, Self::Cat, Self::Goat, Self::Pig]
    }

    /// Returns the fixed hex marker color for this species.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Dog => "#e74c3c",
            Self::Cat => "#3498db",
            Self::Goat => "#f39c12",
            Self::Pig => "#9b59b6",
        }
    }

    /// Returns the plural label used by the map legend.
    #[must_use]
    pub const fn plural_label(self) -> &'static str {
        match self {
            Self::Dog => "Dogs",
            Self::Cat => "Cats",
            Self::Goat => "Goats",
            Self::Pig => "Pigs",
        }
    }
}

/// A species filter selection.
///
/// Replaces the frontend's `"All"` string sentinel at the API boundary:
/// the sentinel is parsed exactly once, and everything past the edge
/// matches against this enum instead of comparing strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeciesFilter {
    /// No filtering; every record is in view.
    All,
    /// Only records whose species exactly equals the given value.
    ///
    /// The value is intentionally an open string, not [`Species`]:
    /// filtering by a species the styling layer doesn't know about is
    /// valid and yields that species' records with the default color.
    Only(String),
}

impl SpeciesFilter {
    /// Returns `true` if a record with the given species is in view.
    #[must_use]
    pub fn matches(&self, species: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == species,
        }
    }

    /// Returns the "Viewing:" label for the stats panel.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All Species",
            Self::Only(species) => species,
        }
    }
}

impl std::str::FromStr for SpeciesFilter {
    type Err = std::convert::Infallible;

    /// Parses the filter sentinel. `"All"` (exact, case-sensitive) means
    /// no filter; any other value filters to that species.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.to_string()))
        }
    }
}

impl std::fmt::Display for SpeciesFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Only(species) => write!(f, "{species}"),
        }
    }
}

/// One pet-license entry.
///
/// Immutable once loaded. Field-name variance in the source formats
/// ("Species" / "ZIP Code" / "Animal's Name" / `animal_s_name`) is
/// normalized away by the loaders in `pet_map_source`; this type always
/// carries the clean shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetRecord {
    /// Species string as licensed (open set; see [`Species`] for the
    /// known categories).
    pub species: String,
    /// Five-digit ZIP code token. Expected numeric but not strictly
    /// validated downstream; it is only ever used as a grouping key.
    pub zip_code: String,
    /// The pet's name. May be absent, empty, or whitespace-only; name
    /// rankings exclude all three.
    #[serde(default)]
    pub name: Option<String>,
}

impl PetRecord {
    /// Creates a record from its parts.
    #[must_use]
    pub fn new(
        species: impl Into<String>,
        zip_code: impl Into<String>,
        name: Option<impl Into<String>>,
    ) -> Self {
        Self {
            species: species.into(),
            zip_code: zip_code.into(),
            name: name.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn species_parse_is_case_sensitive() {
        assert_eq!("Dog".parse::<Species>().unwrap(), Species::Dog);
        assert!("dog".parse::<Species>().is_err());
        assert!("DOG".parse::<Species>().is_err());
    }

    #[test]
    fn species_display_roundtrip() {
        for species in Species::all() {
            let parsed: Species = species.to_string().parse().unwrap();
            assert_eq!(parsed, *species);
        }
    }

    #[test]
    fn species_all_is_legend_order() {
        assert_eq!(
            Species::all(),
            &[Species::Dog, Species::Cat, Species::Goat, Species::Pig]
        );
    }

    #[test]
    fn species_colors_are_hex() {
        for species in Species::all() {
            let color = species.color();
            assert!(color.starts_with('#'));
            assert_eq!(color.len(), 7);
        }
    }

    #[test]
    fn filter_sentinel_is_exact() {
        assert_eq!(SpeciesFilter::from_str("All").unwrap(), SpeciesFilter::All);
        assert_eq!(
            SpeciesFilter::from_str("all").unwrap(),
            SpeciesFilter::Only("all".to_string())
        );
        assert_eq!(
            SpeciesFilter::from_str("Dog").unwrap(),
            SpeciesFilter::Only("Dog".to_string())
        );
    }

    #[test]
    fn filter_matches() {
        let all = SpeciesFilter::All;
        assert!(all.matches("Dog"));
        assert!(all.matches("Armadillo"));

        let dogs = SpeciesFilter::Only("Dog".to_string());
        assert!(dogs.matches("Dog"));
        assert!(!dogs.matches("Cat"));
    }

    #[test]
    fn filter_labels() {
        assert_eq!(SpeciesFilter::All.label(), "All Species");
        assert_eq!(SpeciesFilter::Only("Goat".to_string()).label(), "Goat");
    }

    #[test]
    fn record_new_builds_parts() {
        let record = PetRecord::new("Dog", "98101", Some("Buddy"));
        assert_eq!(record.species, "Dog");
        assert_eq!(record.zip_code, "98101");
        assert_eq!(record.name.as_deref(), Some("Buddy"));

        let unnamed = PetRecord::new("Goat", "98102", None::<&str>);
        assert!(unnamed.name.is_none());
    }
}
