//! Pick the start between two scored players.

use serde::Serialize;
use std::fmt;

use crate::model::composite::PlayerScore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    A,
    B,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPlayer {
    pub name: String,
    pub score: PlayerScore,
}

impl ScoredPlayer {
    pub fn final_score(&self) -> f64 {
        self.score.final_score
    }
}

/// Outcome of one comparison. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub player_a: ScoredPlayer,
    pub player_b: ScoredPlayer,
    pub winner: Side,
    pub recommendation: String,
}

impl ComparisonResult {
    pub fn winning_player(&self) -> &ScoredPlayer {
        match self.winner {
            Side::A => &self.player_a,
            Side::B => &self.player_b,
        }
    }

    pub fn losing_player(&self) -> &ScoredPlayer {
        match self.winner {
            Side::A => &self.player_b,
            Side::B => &self.player_a,
        }
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.recommendation)
    }
}

pub fn recommendation(winner: &ScoredPlayer, loser: &ScoredPlayer) -> String {
    format!(
        "Start {} with estimated fantasy points of {:.2} over {} with estimated fantasy points of {:.2}",
        winner.name,
        winner.final_score(),
        loser.name,
        loser.final_score()
    )
}

/// A starts only with a strictly higher final score; ties go to B.
pub fn decide(player_a: ScoredPlayer, player_b: ScoredPlayer) -> ComparisonResult {
    let winner = if player_a.final_score() > player_b.final_score() {
        Side::A
    } else {
        Side::B
    };
    let recommendation = match winner {
        Side::A => recommendation(&player_a, &player_b),
        Side::B => recommendation(&player_b, &player_a),
    };

    ComparisonResult {
        player_a,
        player_b,
        winner,
        recommendation,
    }
}
