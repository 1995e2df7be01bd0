//! Blend season outlook, team form, recent production and matchup into one
//! expected-points figure per player.

use serde::Serialize;

use crate::{
    cli::types::Week,
    model::{
        points::{season_average_points, ScoringWeights},
        team_form::{team_form_multiplier, TeamRecord},
    },
    stats::types::{RecentGames, SeasonProjection},
};

/// Weight of the solo outlook against the matchup term in the final blend.
const SOLO_WEIGHT: f64 = 7.0;
const MATCHUP_WEIGHT: f64 = 1.0;

/// Everything the scorer needs for one player, already fetched.
#[derive(Debug, Clone)]
pub struct PlayerInputs<'a> {
    pub projection: &'a SeasonProjection,
    pub team: &'a TeamRecord,
    pub recent: &'a RecentGames,
    pub matchup_allowed: f64,
}

/// Intermediate and final figures for one player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerScore {
    pub season_avg: f64,
    pub team_multiplier: f64,
    pub updated_projection: f64,
    pub recent_avg: f64,
    pub last_week: f64,
    pub solo: f64,
    pub matchup_allowed: f64,
    pub final_score: f64,
}

/// Sum of provider PPR points over the recent games, averaged over `week - 1`.
pub fn recent_average_points(recent: &RecentGames, week: Week) -> f64 {
    let prior = week.prior_games();
    if prior == 0 {
        return 0.0;
    }
    let total: f64 = recent.iter().map(|g| g.fantasy_points.ppr).sum();
    total / f64::from(prior)
}

/// PPR points from the most recent game, or 0 with no games.
pub fn last_week_points(recent: &RecentGames) -> f64 {
    recent
        .last_game()
        .map(|g| g.fantasy_points.ppr)
        .unwrap_or(0.0)
}

/// Score one player for `week`.
pub fn score_player(inputs: &PlayerInputs<'_>, week: Week, weights: &ScoringWeights) -> PlayerScore {
    let season_avg = season_average_points(inputs.projection, weights);
    let team_multiplier = team_form_multiplier(inputs.team);
    let updated_projection = season_avg * team_multiplier;
    let recent_avg = recent_average_points(inputs.recent, week);
    let last_week = last_week_points(inputs.recent);
    let solo = (updated_projection + recent_avg + last_week) / 3.0;
    let final_score = (solo * SOLO_WEIGHT + inputs.matchup_allowed * MATCHUP_WEIGHT)
        / (SOLO_WEIGHT + MATCHUP_WEIGHT);

    PlayerScore {
        season_avg,
        team_multiplier,
        updated_projection,
        recent_avg,
        last_week,
        solo,
        matchup_allowed: inputs.matchup_allowed,
        final_score,
    }
}
