//! Disclosure domain types: trades, politicians, committees.

pub mod batch;
pub mod committee;
pub mod directory;
pub mod id;
pub mod politician;
pub mod trade;

pub use batch::Batch;
pub use committee::{Committee, CommitteeMember, Stats};
pub use directory::PoliticianDirectory;
pub use id::{CommitteeId, PoliticianId};
pub use politician::{Asset, Chamber, Issuer, Politician};
pub use trade::{Trade, TradeQuery, TxType};
