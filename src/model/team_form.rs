//! Team momentum as a projection multiplier.

use crate::cli::types::TeamAbv;
use serde::Serialize;

/// Outcome of a team's current run of games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StreakResult {
    Win,
    Loss,
    Tie,
    Unknown,
}

impl StreakResult {
    /// Map the provider's single-letter streak code.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_uppercase().as_str() {
            "W" => StreakResult::Win,
            "L" => StreakResult::Loss,
            "T" => StreakResult::Tie,
            _ => StreakResult::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Streak {
    pub result: StreakResult,
    pub length: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRecord {
    pub team: TeamAbv,
    pub wins: u32,
    pub losses: u32,
    pub streak: Streak,
}

/// Boost applied to a player's projection for a team in good form.
///
/// Only a winning streak scales the boost; losing and tied streaks count as 1.
/// A record with zero losses or zero wins uses `wins * 0.01` as the base (a
/// winless team therefore gets no boost at all), exactly one loss uses
/// `(wins - 1) * 0.01`, and anything else the win/loss ratio.
pub fn team_form_multiplier(record: &TeamRecord) -> f64 {
    let streak_factor = match record.streak.result {
        StreakResult::Win => f64::from(record.streak.length),
        _ => 1.0,
    };

    let wins = f64::from(record.wins);
    let base = if record.losses == 0 || record.wins == 0 {
        wins * 0.01
    } else if record.losses == 1 {
        (wins - 1.0) * 0.01
    } else {
        (wins / f64::from(record.losses)) * 0.01
    };

    base * (streak_factor / 2.0) + 1.0
}
