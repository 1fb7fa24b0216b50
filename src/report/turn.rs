//! Turn identifiers.
//!
//! Turns are written `YYYY-MM` (game year, then month). Ordering by the
//! numeric pair matches ordering by the text, so `0901-12 < 0902-01`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a turn id.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TurnError {
    #[error("expected 'YYYY-MM', got '{0}'")]
    Malformed(String),

    #[error("month {0} out of range 01-12")]
    MonthOutOfRange(u8),
}

/// A game turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TurnId {
    pub year: u16,
    pub month: u8,
}

impl TurnId {
    /// Creates a turn id, checking the month.
    pub fn new(year: u16, month: u8) -> Result<Self, TurnError> {
        if year > 9999 {
            return Err(TurnError::Malformed(format!("{}-{:02}", year, month)));
        }
        if !(1..=12).contains(&month) {
            return Err(TurnError::MonthOutOfRange(month));
        }
        Ok(TurnId { year, month })
    }

    /// Parses `YYYY-MM`.
    pub fn parse(s: &str) -> Result<Self, TurnError> {
        let malformed = || TurnError::Malformed(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(malformed)?;
        if year.len() != 4
            || month.len() != 2
            || !year.bytes().all(|b| b.is_ascii_digit())
            || !month.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }
        let year: u16 = year.parse().map_err(|_| malformed())?;
        let month: u8 = month.parse().map_err(|_| malformed())?;
        TurnId::new(year, month)
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for TurnId {
    type Err = TurnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TurnId::parse(s)
    }
}

impl From<TurnId> for String {
    fn from(turn: TurnId) -> Self {
        turn.to_string()
    }
}

impl TryFrom<String> for TurnId {
    type Error = TurnError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        TurnId::parse(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let t = TurnId::parse("0901-07").unwrap();
        assert_eq!(t, TurnId { year: 901, month: 7 });
        assert_eq!(t.to_string(), "0901-07");
    }

    #[test]
    fn ordering_matches_text() {
        let mut turns: Vec<TurnId> = ["0902-01", "0901-12", "0901-02", "1000-01"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        turns.sort();
        let text: Vec<String> = turns.iter().map(|t| t.to_string()).collect();
        assert_eq!(text, vec!["0901-02", "0901-12", "0902-01", "1000-01"]);
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "0901", "901-01", "0901-1", "0901/01", "09a1-01", "0901-01x", "+901-01"] {
            assert!(matches!(TurnId::parse(bad), Err(TurnError::Malformed(_))), "{}", bad);
        }
        assert_eq!(TurnId::parse("0901-00"), Err(TurnError::MonthOutOfRange(0)));
        assert_eq!(TurnId::parse("0901-13"), Err(TurnError::MonthOutOfRange(13)));
    }
}
