//! The scoring and comparison pipeline.
//!
//! Leaf-first: `points`, `team_form` and `matchup` feed `composite`, which
//! feeds `decision`.

pub mod composite;
pub mod decision;
pub mod matchup;
pub mod points;
pub mod team_form;

pub use composite::{score_player, PlayerInputs, PlayerScore};
pub use decision::{decide, ComparisonResult, ScoredPlayer, Side};
pub use matchup::{matchup_strength, points_allowed};
pub use points::{fantasy_points, season_average_points, ScoringWeights};
pub use team_form::{team_form_multiplier, TeamRecord};
