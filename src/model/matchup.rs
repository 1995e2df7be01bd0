//! Opponent defensive weakness, tuned per position.
//!
//! Each position reads a different slice of the opponent's season defense
//! and adds back a different slice of the player's own recent production.
//! The formulas are intentionally asymmetric and are kept separate.

use tracing::debug;

use crate::{
    cli::types::{Position, SeasonType, TeamAbv, Week},
    stats::{
        source::{StatSource, TeamQuery},
        types::{find_team, DefenseStats, RecentGames},
    },
};

/// Per-game average of `total` over the `prior_games` already played.
fn per_game(total: f64, prior_games: f64) -> f64 {
    total / prior_games
}

/// Expected fantasy points the opponent's defense gives up to `position`,
/// normalized per game by `week - 1`.
///
/// `week` must be at least 2.
pub fn points_allowed(
    position: Position,
    defense: &DefenseStats,
    recent: &RecentGames,
    week: Week,
) -> f64 {
    let n = f64::from(week.prior_games());
    let sum = |f: fn(&crate::stats::types::GameLog) -> f64| recent.iter().map(f).sum::<f64>();

    match position.scoring_position() {
        Position::QB => {
            let allowed = defense.passing_yards_allowed * 0.04
                + defense.passing_td_allowed * 4.0
                - defense.defensive_interceptions * 2.0;
            let rushing = per_game(sum(|g| g.rushing.rush_yds), n) * 0.1;
            per_game(allowed, n) + rushing
        }
        Position::WR => {
            let allowed = defense.passing_yards_allowed * 0.1 + defense.passing_td_allowed * 6.0;
            let rushing = per_game(sum(|g| g.rushing.rush_yds), n) * 0.1;
            let throwing = per_game(sum(|g| g.passing.pass_yds), n) * 0.04;
            let touchdowns = per_game(sum(|g| g.passing.pass_td), n) * 4.0;
            per_game(allowed, n) / 2.0 + rushing + throwing + touchdowns
        }
        Position::TE => {
            let allowed = defense.passing_yards_allowed * 0.1 + defense.passing_td_allowed * 6.0;
            per_game(allowed, n) / 3.0
        }
        // RB, with PK and FB folded in by `scoring_position`.
        _ => {
            let allowed = defense.rushing_yards_allowed * 0.1 + defense.rushing_td_allowed * 6.0;
            let receiving = per_game(
                sum(|g| g.receiving.rec_yds * 0.1 + g.receiving.receptions + g.receiving.rec_td * 6.0),
                n,
            );
            let throwing = per_game(sum(|g| g.passing.pass_yds), n) * 0.04;
            let touchdowns = per_game(sum(|g| g.passing.pass_td), n) * 4.0;
            per_game(allowed, n) + receiving + throwing + touchdowns
        }
    }
}

/// Resolve `team`'s opponent for `week`, fetch that opponent's season
/// defense and score it for `position`.
///
/// Returns `None` when the schedule, opponent or defensive stats are
/// unavailable, or when `position` has no matchup formula.
pub async fn matchup_strength<S>(
    source: &S,
    team: &TeamAbv,
    week: Week,
    season_type: SeasonType,
    position: &str,
    recent: &RecentGames,
) -> Option<f64>
where
    S: StatSource + ?Sized,
{
    let Ok(position) = position.parse::<Position>() else {
        debug!(position, "no matchup formula for position");
        return None;
    };

    let schedule = source.week_schedule(week, season_type).await?;
    let Some(opponent) = schedule.opponent_of(team) else {
        debug!(%team, %week, "team has no game scheduled");
        return None;
    };

    let teams = source.teams(&TeamQuery::with_stats(&opponent)).await?;
    let defense = find_team(&teams, opponent.as_str())?.defense()?;

    let allowed = points_allowed(position, defense, recent, week);
    debug!(%team, %opponent, %position, allowed, "matchup strength");
    Some(allowed)
}
