//! Pet-name frequency ranking.

use std::collections::HashMap;

use pet_map_license_models::PetRecord;

/// Number of top names shown per marker popup.
pub const DEFAULT_TOP_NAMES: usize = 3;

/// Ranks pet names by frequency, most common first.
///
/// Records with no name, an empty name, or a whitespace-only name are
/// excluded. Counting keys on the name exactly as recorded (untrimmed),
/// so `"Buddy"` and `" Buddy"` rank separately. Ties keep the order in
/// which the names were first encountered. At most `top_k` entries are
/// returned.
#[must_use]
pub fn name_rankings(records: &[&PetRecord], top_k: usize) -> Vec<(String, u64)> {
    let mut frequencies: Vec<(String, u64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let Some(name) = record.name.as_deref() else {
            continue;
        };
        if name.trim().is_empty() {
            continue;
        }
        match index.get(name) {
            Some(&slot) => frequencies[slot].1 += 1,
            None => {
                index.insert(name.to_string(), frequencies.len());
                frequencies.push((name.to_string(), 1));
            }
        }
    }

    frequencies.sort_by(|a, b| b.1.cmp(&a.1));
    frequencies.truncate(top_k);
    frequencies
}

/// Formats the top names as the popup string, e.g. `"Buddy (3), Max (2)"`.
///
/// Empty input formats to the empty string.
#[must_use]
pub fn top_names(records: &[&PetRecord], top_k: usize) -> String {
    name_rankings(records, top_k)
        .into_iter()
        .map(|(name, count)| format!("{name} ({count})"))
        .collect::<Vec<_>>()
        .join(", ")
}
