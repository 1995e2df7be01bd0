//! Time-related types for NFL seasons and weeks.

use crate::error::{FflError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2024)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for Week numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Number of games played before this week.
    pub fn prior_games(&self) -> u16 {
        self.0.saturating_sub(1)
    }

    /// Reject weeks with no prior games; every per-game average divides by
    /// `week - 1`.
    pub fn ensure_has_prior_games(self) -> Result<Self> {
        if self.0 < 2 {
            Err(FflError::InvalidWeek { week: self.0 })
        } else {
            Ok(self)
        }
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Portion of the NFL calendar a schedule query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeasonType {
    Preseason,
    #[default]
    Regular,
    Postseason,
}

impl SeasonType {
    /// Query-string value the provider expects.
    pub fn as_param(&self) -> &'static str {
        match self {
            SeasonType::Preseason => "pre",
            SeasonType::Regular => "reg",
            SeasonType::Postseason => "post",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

impl FromStr for SeasonType {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pre" | "preseason" => Ok(SeasonType::Preseason),
            "reg" | "regular" => Ok(SeasonType::Regular),
            "post" | "postseason" => Ok(SeasonType::Postseason),
            _ => Err(FflError::InvalidSeasonType {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_parsing_and_prior_games() {
        let week: Week = "6".parse().unwrap();
        assert_eq!(week.as_u16(), 6);
        assert_eq!(week.prior_games(), 5);
        assert_eq!(Week::new(0).prior_games(), 0);
        assert!("six".parse::<Week>().is_err());
    }

    #[test]
    fn test_week_one_has_no_prior_games() {
        match Week::new(1).ensure_has_prior_games() {
            Err(FflError::InvalidWeek { week }) => assert_eq!(week, 1),
            other => panic!("Expected InvalidWeek, got {:?}", other),
        }
        assert!(Week::new(0).ensure_has_prior_games().is_err());
        assert_eq!(Week::new(2).ensure_has_prior_games().unwrap(), Week::new(2));
    }

    #[test]
    fn test_season_default_and_parse() {
        assert_eq!(Season::default().as_u16(), 2024);
        assert_eq!("2023".parse::<Season>().unwrap(), Season::new(2023));
    }

    #[test]
    fn test_season_type_parsing() {
        assert_eq!("reg".parse::<SeasonType>().unwrap(), SeasonType::Regular);
        assert_eq!("POST".parse::<SeasonType>().unwrap(), SeasonType::Postseason);
        assert_eq!("preseason".parse::<SeasonType>().unwrap(), SeasonType::Preseason);
        assert!("playoffs".parse::<SeasonType>().is_err());
        assert_eq!(SeasonType::default().to_string(), "reg");
    }
}
