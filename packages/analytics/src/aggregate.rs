//! Species filtering and ZIP-code grouping.

use std::collections::{BTreeSet, HashMap};

use pet_map_license_models::{PetRecord, SpeciesFilter};

/// All records for one ZIP code in the current view.
///
/// Transient: rebuilt in full on every filter change, never mutated
/// incrementally, and borrows from the loaded record set. Aggregates
/// appear in the order their ZIP code was first encountered in the
/// input.
#[derive(Debug)]
pub struct ZipAggregate<'a> {
    /// The grouping key.
    pub zip_code: &'a str,
    /// Every record for this ZIP, in input order.
    pub records: Vec<&'a PetRecord>,
}

impl ZipAggregate<'_> {
    /// Number of records in this aggregate.
    #[must_use]
    pub fn count(&self) -> usize {
        self.records.len()
    }
}

/// Returns the distinct species present in the data, sorted ascending.
#[must_use]
pub fn unique_species(records: &[PetRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.species.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

/// Filters records to the given species selection, preserving order.
///
/// [`SpeciesFilter::All`] keeps every record; otherwise only records
/// whose species exactly equals the filtered value remain.
#[must_use]
pub fn filter_by_species<'a>(
    records: &'a [PetRecord],
    filter: &SpeciesFilter,
) -> Vec<&'a PetRecord> {
    records
        .iter()
        .filter(|record| filter.matches(&record.species))
        .collect()
}

/// Groups records by ZIP code in a single pass.
///
/// Output order is the order in which distinct ZIP codes first appear
/// in the input, not sorted. The sum of aggregate counts always equals
/// the input length, and each distinct ZIP appears exactly once.
#[must_use]
pub fn group_by_zip_code<'a>(records: &[&'a PetRecord]) -> Vec<ZipAggregate<'a>> {
    let mut aggregates: Vec<ZipAggregate<'a>> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for &record in records {
        let slot = *index.entry(record.zip_code.as_str()).or_insert_with(|| {
            aggregates.push(ZipAggregate {
                zip_code: record.zip_code.as_str(),
                records: Vec::new(),
            });
            aggregates.len() - 1
        });
        aggregates[slot].records.push(record);
    }

    aggregates
}
