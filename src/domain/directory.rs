//! In-memory politician directory used for name lookups.

use std::collections::HashMap;

use super::id::PoliticianId;

/// Map from politician ID to display name.
///
/// Entries keep insertion order, which is also the tie-break order for
/// [`lookup`](Self::lookup) when several politicians share a name. Inserting
/// an existing ID replaces its name in place.
#[derive(Debug, Clone, Default)]
pub struct PoliticianDirectory {
    entries: Vec<(PoliticianId, String)>,
    index: HashMap<PoliticianId, usize>,
}

impl PoliticianDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, id: PoliticianId, name: String) {
        match self.index.get(&id) {
            Some(&slot) => self.entries[slot].1 = name,
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, name));
            }
        }
    }

    #[must_use]
    pub fn contains(&self, id: &PoliticianId) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn name(&self, id: &PoliticianId) -> Option<&str> {
        self.index.get(id).map(|&slot| self.entries[slot].1.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PoliticianId, &str)> {
        self.entries.iter().map(|(id, name)| (id, name.as_str()))
    }

    /// Find a politician by display name.
    ///
    /// Matches case-insensitively against the full name, or against the
    /// last-name token (the text before the first comma). Returns the first
    /// match in insertion order.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&PoliticianId> {
        let needle = name.to_lowercase();
        self.entries
            .iter()
            .find(|(_, full)| {
                let full = full.to_lowercase();
                let last = full.split(',').next().unwrap_or_default().trim();
                needle == full || needle == last
            })
            .map(|(id, _)| id)
    }
}

impl FromIterator<(PoliticianId, String)> for PoliticianDirectory {
    fn from_iter<I: IntoIterator<Item = (PoliticianId, String)>>(iter: I) -> Self {
        let mut directory = Self::new();
        for (id, name) in iter {
            directory.insert(id, name);
        }
        directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory(entries: &[(&str, &str)]) -> PoliticianDirectory {
        entries
            .iter()
            .map(|(id, name)| (PoliticianId::new(*id), (*name).to_string()))
            .collect()
    }

    #[test]
    fn lookup_matches_full_name_case_insensitively() {
        let dir = directory(&[("p1", "Doe, Jane")]);
        assert_eq!(dir.lookup("doe, jane").map(PoliticianId::as_str), Some("p1"));
        assert_eq!(dir.lookup("DOE, JANE").map(PoliticianId::as_str), Some("p1"));
    }

    #[test]
    fn lookup_matches_last_name_token() {
        let dir = directory(&[("p1", "Doe, Jane")]);
        assert_eq!(dir.lookup("doe").map(PoliticianId::as_str), Some("p1"));
        assert_eq!(dir.lookup("Doe").map(PoliticianId::as_str), Some("p1"));
    }

    #[test]
    fn lookup_misses_return_none() {
        let dir = directory(&[("p1", "Doe, Jane")]);
        assert!(dir.lookup("smith").is_none());
        assert!(dir.lookup("jane").is_none());
    }

    #[test]
    fn lookup_without_comma_compares_whole_name() {
        let dir = directory(&[("P000197", "Nancy Pelosi")]);
        assert_eq!(
            dir.lookup("nancy pelosi").map(PoliticianId::as_str),
            Some("P000197")
        );
        assert!(dir.lookup("pelosi").is_none());
    }

    #[test]
    fn ties_resolve_to_first_inserted() {
        let dir = directory(&[("p1", "Smith, John"), ("p2", "Smith, Adam")]);
        assert_eq!(dir.lookup("smith").map(PoliticianId::as_str), Some("p1"));
    }

    #[test]
    fn duplicate_ids_keep_position_and_take_latest_name() {
        let dir = directory(&[("p1", "Old"), ("p2", "Other"), ("p1", "New")]);
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.name(&PoliticianId::new("p1")), Some("New"));
        let order: Vec<_> = dir.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, vec!["p1", "p2"]);
    }
}
