//! Results of normalizing a page of records.

use crate::error::Error;

/// Records that normalized cleanly, alongside the ones that did not.
///
/// Upstream data is inconsistent, so one bad record must not discard the
/// rest of its page. Failures are [`Error::MalformedRecord`] values carrying
/// the index of the offending record in the source page.
#[derive(Debug)]
pub struct Batch<T> {
    pub records: Vec<T>,
    pub failures: Vec<Error>,
}

impl<T> Batch<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// True when every record normalized.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

impl<T> Default for Batch<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for Batch<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Batch<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
