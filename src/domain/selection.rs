//! Intersection of discovered repositories with an optional allow list.

use std::collections::HashSet;

use super::RepositoryName;

/// Select the repositories to process.
///
/// An empty (or blank) `allow_list_csv` keeps every discovered repository.
/// Otherwise only discovered names listed in the CSV are kept, in discovered
/// order. Listed names that were not discovered are ignored.
pub fn select(discovered: &[RepositoryName], allow_list_csv: &str) -> Vec<RepositoryName> {
    if allow_list_csv.trim().is_empty() {
        return discovered.to_vec();
    }

    let allowed: HashSet<&str> = allow_list_csv.split(',').map(str::trim).collect();

    discovered.iter().filter(|name| allowed.contains(name.as_str())).cloned().collect()
}
