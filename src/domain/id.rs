//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Politician identifier as issued by the disclosure API (e.g. `P000197`).
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoliticianId(String);

impl PoliticianId {
    /// Create a new `PoliticianId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the politician ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PoliticianId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PoliticianId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PoliticianId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Committee identifier (e.g. `hsju` for House Judiciary).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitteeId(String);

impl CommitteeId {
    /// Create a new `CommitteeId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the committee ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitteeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CommitteeId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for CommitteeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
