//! Shared record cleaning rules.

use pet_map_license_models::PetRecord;

/// Builds a clean record from raw field values.
///
/// Trims every field, truncates dash-separated ZIP+4 values to their
/// five-digit prefix, and maps blank names to `None`. Returns `None`
/// when the species or ZIP code is empty after cleaning; such rows
/// carry nothing the map can use.
pub(crate) fn clean_record(
    species: &str,
    zip_code: &str,
    name: Option<&str>,
) -> Option<PetRecord> {
    let species = species.trim();
    let trimmed_zip = zip_code.trim();
    let zip = trimmed_zip
        .split_once('-')
        .map_or(trimmed_zip, |(prefix, _)| prefix);

    if species.is_empty() || zip.is_empty() {
        return None;
    }

    let name = name.map(str::trim).filter(|name| !name.is_empty());
    Some(PetRecord::new(species, zip, name))
}
