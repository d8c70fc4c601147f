//! Congressional committees and their trading statistics.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::id::{CommitteeId, PoliticianId};

/// Aggregate trading activity of a committee's members.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub count_issuers: u64,
    pub count_politicians: u64,
    pub count_trades: u64,
    pub date_first_traded: Option<DateTime<FixedOffset>>,
    pub date_last_traded: Option<DateTime<FixedOffset>>,
    pub volume: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeMember {
    pub politician_id: PoliticianId,
    pub member_role: String,
    pub side: String,
    pub chamber: String,
    pub party: String,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub nickname: Option<String>,
}

/// A committee with its ordered member list.
///
/// Two committees are equal when their IDs are equal, regardless of the
/// member list or statistics captured at fetch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Committee {
    pub committee_id: CommitteeId,
    /// `house`, `senate` or `joint`.
    pub chamber: String,
    pub committee_name: String,
    pub committee_url: String,
    pub members: Vec<CommitteeMember>,
    pub stats: Stats,
}

impl PartialEq for Committee {
    fn eq(&self, other: &Self) -> bool {
        self.committee_id == other.committee_id
    }
}

impl Eq for Committee {}

impl Hash for Committee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.committee_id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn committee(id: &str, name: &str) -> Committee {
        Committee {
            committee_id: CommitteeId::new(id),
            chamber: "house".into(),
            committee_name: name.into(),
            committee_url: String::new(),
            members: vec![],
            stats: Stats::default(),
        }
    }

    #[test]
    fn equality_is_by_id_only() {
        assert_eq!(committee("hsju", "Judiciary"), committee("hsju", "renamed"));
        assert_ne!(committee("hsju", "Judiciary"), committee("slet", "Judiciary"));
    }
}
