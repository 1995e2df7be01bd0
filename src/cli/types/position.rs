//! Offensive position types and utilities.

use crate::error::FflError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Offensive positions the comparison model knows how to score.
///
/// Kickers (PK) and fullbacks (FB) carry no position-specific matchup
/// formula of their own and are scored as running backs.
///
/// # Examples
///
/// ```rust
/// use ffl_compare::Position;
///
/// let pos: Position = "wr".parse().unwrap();
/// assert_eq!(pos, Position::WR);
/// assert_eq!(Position::FB.scoring_position(), Position::RB);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    PK,
    FB,
}

impl Position {
    /// The position whose matchup formula applies to this player.
    pub fn scoring_position(&self) -> Position {
        match self {
            Position::PK | Position::FB => Position::RB,
            other => *other,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::PK => "PK",
            Position::FB => "FB",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = FflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "PK" | "K" => Ok(Position::PK),
            "FB" => Ok(Position::FB),
            _ => Err(FflError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parsing() {
        assert_eq!("QB".parse::<Position>().unwrap(), Position::QB);
        assert_eq!("rb".parse::<Position>().unwrap(), Position::RB);
        assert_eq!(" WR ".parse::<Position>().unwrap(), Position::WR);
        assert_eq!("te".parse::<Position>().unwrap(), Position::TE);
        assert_eq!("K".parse::<Position>().unwrap(), Position::PK);
        assert_eq!("PK".parse::<Position>().unwrap(), Position::PK);
        assert_eq!("FB".parse::<Position>().unwrap(), Position::FB);
    }

    #[test]
    fn test_unknown_position_is_rejected() {
        match "DEF".parse::<Position>() {
            Err(FflError::InvalidPosition { position }) => assert_eq!(position, "DEF"),
            other => panic!("Expected InvalidPosition, got {:?}", other),
        }
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn test_scoring_position_folds_kickers_and_fullbacks() {
        assert_eq!(Position::PK.scoring_position(), Position::RB);
        assert_eq!(Position::FB.scoring_position(), Position::RB);
        assert_eq!(Position::QB.scoring_position(), Position::QB);
        assert_eq!(Position::TE.scoring_position(), Position::TE);
    }

    #[test]
    fn test_position_display_round_trips() {
        for pos in [
            Position::QB,
            Position::RB,
            Position::WR,
            Position::TE,
            Position::PK,
            Position::FB,
        ] {
            assert_eq!(pos.to_string().parse::<Position>().unwrap(), pos);
        }
    }
}
