//! Politicians, chambers and the flat records nested inside a trade.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Chamber of Congress a politician sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::House => "house",
            Self::Senate => "senate",
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chamber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "house" => Ok(Self::House),
            "senate" => Ok(Self::Senate),
            other => Err(format!("unknown chamber '{other}'")),
        }
    }
}

/// Politician details embedded in a trade record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Politician {
    pub state_id: String,
    pub chamber: Chamber,
    pub dob: Option<NaiveDate>,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
    pub nickname: Option<String>,
    pub party: String,
}

impl Politician {
    /// Display name, preferring the nickname over the first name.
    #[must_use]
    pub fn display_name(&self) -> String {
        let first = self.nickname.as_deref().unwrap_or(&self.first_name);
        format!("{first} {}", self.last_name)
    }
}

/// The traded asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub asset_type: String,
    pub asset_ticker: Option<String>,
    pub instrument: Option<String>,
}

/// The company or fund behind the traded asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
    pub state_id: Option<String>,
    pub c2iq: Option<String>,
    pub country: Option<String>,
    pub issuer_name: Option<String>,
    pub issuer_ticker: Option<String>,
    pub sector: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chamber_parses_case_insensitively() {
        assert_eq!("House".parse::<Chamber>(), Ok(Chamber::House));
        assert_eq!(" senate ".parse::<Chamber>(), Ok(Chamber::Senate));
        assert!("joint".parse::<Chamber>().is_err());
    }

    #[test]
    fn display_name_prefers_nickname() {
        let politician = Politician {
            state_id: "ca".into(),
            chamber: Chamber::House,
            dob: None,
            first_name: "Nancy Patricia".into(),
            last_name: "Pelosi".into(),
            gender: Some("female".into()),
            nickname: Some("Nancy".into()),
            party: "democrat".into(),
        };
        assert_eq!(politician.display_name(), "Nancy Pelosi");
    }
}
