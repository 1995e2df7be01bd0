//! Start/sit comparison between two players.
//!
//! [`compare`] runs the full pipeline against any [`StatSource`]:
//!
//! 1. reject bad input before touching the provider
//! 2. season projections for both players (one full-set read)
//! 3. team standings and each player's team record
//! 4. each player's recent games, `week - 1` of them
//! 5. each player's matchup strength
//! 6. composite scores and the decision
//!
//! The first unavailable read ends the comparison with a [`CompareError`];
//! nothing is scored from partial data. [`handle_compare`] is the CLI entry
//! point and adds name resolution and display cards on top.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    cli::types::{PlayerId, SeasonType, Week},
    config::ProviderConfig,
    model::{
        composite::{score_player, PlayerInputs},
        decision::{decide, ComparisonResult, ScoredPlayer},
        matchup::matchup_strength,
        points::ScoringWeights,
    },
    stats::{
        http::{ProjectionQuery, ProjectionWeek},
        lookup::find_projection,
        source::{StatSource, TeamQuery},
        types::find_team,
    },
    Result,
};

use super::{
    common::{print_json, resolve_player_ids, CommandContext},
    player_card::{build_player_card, PlayerCard},
};


/// User-facing comparison failures. `Display` is the message shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompareError {
    #[error("Error: Both player identifiers are required.")]
    MissingIdentifier,

    #[error("Error: Week must be 2 or later to compare players.")]
    WeekTooEarly { week: u16 },

    #[error("Error: Could not find one or both players.")]
    PlayerNotFound,

    #[error("Error: Could not retrieve projections for one or both players.")]
    Projections,

    #[error("Error: Could not retrieve team information.")]
    TeamInfo,

    #[error("Error: Could not retrieve team stats for one or both players.")]
    TeamStats,

    #[error("Error: Could not retrieve recent game data for one or both players.")]
    RecentGames,

    #[error("Error: Could not determine matchup strength for one or both players.")]
    Matchup,
}

/// A player already resolved to a provider ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRef {
    pub id: PlayerId,
    pub name: String,
}

impl PlayerRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareRequest {
    pub player_a: PlayerRef,
    pub player_b: PlayerRef,
    pub week: Week,
}

/// Scoring knobs that are not part of a single request.
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    pub weights: ScoringWeights,
    pub season_type: SeasonType,
}

impl CompareOptions {
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self {
            weights: config.weights,
            season_type: config.season_type,
        }
    }
}

/// Reject input that cannot be scored. Runs before any provider read.
pub fn validate_input(
    player_a: &str,
    player_b: &str,
    week: Week,
) -> std::result::Result<Week, CompareError> {
    if player_a.trim().is_empty() || player_b.trim().is_empty() {
        return Err(CompareError::MissingIdentifier);
    }
    week.ensure_has_prior_games()
        .map_err(|_| CompareError::WeekTooEarly {
            week: week.as_u16(),
        })
}

/// Score both players for `request.week` and recommend one.
pub async fn compare<S>(
    source: &S,
    options: &CompareOptions,
    request: &CompareRequest,
) -> std::result::Result<ComparisonResult, CompareError>
where
    S: StatSource + ?Sized,
{
    let CompareRequest {
        player_a,
        player_b,
        week,
    } = request;
    let week = validate_input(player_a.id.as_str(), player_b.id.as_str(), *week)?;

    let projections = source
        .projections(&ProjectionQuery::All, ProjectionWeek::Season)
        .await
        .ok_or(CompareError::Projections)?;
    let (Some(proj_a), Some(proj_b)) = (
        find_projection(&projections, &player_a.id),
        find_projection(&projections, &player_b.id),
    ) else {
        return Err(CompareError::Projections);
    };

    let teams = source
        .teams(&TeamQuery::standings())
        .await
        .ok_or(CompareError::TeamInfo)?;
    let (Some(team_a), Some(team_b)) = (
        find_team(&teams, &proj_a.team),
        find_team(&teams, &proj_b.team),
    ) else {
        return Err(CompareError::TeamStats);
    };
    let (record_a, record_b) = (team_a.record(), team_b.record());

    let limit = Some(week.prior_games());
    let (recent_a, recent_b) = tokio::join!(
        source.recent_games(&player_a.id, limit),
        source.recent_games(&player_b.id, limit),
    );
    let (Some(recent_a), Some(recent_b)) = (recent_a, recent_b) else {
        return Err(CompareError::RecentGames);
    };

    let (matchup_a, matchup_b) = tokio::join!(
        matchup_strength(
            source,
            &record_a.team,
            week,
            options.season_type,
            &proj_a.pos,
            &recent_a,
        ),
        matchup_strength(
            source,
            &record_b.team,
            week,
            options.season_type,
            &proj_b.pos,
            &recent_b,
        ),
    );
    let (Some(matchup_a), Some(matchup_b)) = (matchup_a, matchup_b) else {
        return Err(CompareError::Matchup);
    };

    let score_a = score_player(
        &PlayerInputs {
            projection: proj_a,
            team: &record_a,
            recent: &recent_a,
            matchup_allowed: matchup_a,
        },
        week,
        &options.weights,
    );
    let score_b = score_player(
        &PlayerInputs {
            projection: proj_b,
            team: &record_b,
            recent: &recent_b,
            matchup_allowed: matchup_b,
        },
        week,
        &options.weights,
    );
    debug!(player = %player_a.name, ?score_a, "scored");
    debug!(player = %player_b.name, ?score_b, "scored");

    let result = decide(
        ScoredPlayer {
            name: player_a.name.clone(),
            score: score_a,
        },
        ScoredPlayer {
            name: player_b.name.clone(),
            score: score_b,
        },
    );
    info!(winner = %result.winning_player().name, %week, "comparison complete");
    Ok(result)
}

/// Comparison plus display assets, as printed by the CLI.
#[derive(Debug, Serialize)]
pub struct CompareReport {
    pub result: ComparisonResult,
    pub cards: [PlayerCard; 2],
}

/// Resolve both names, compare, and print the recommendation with player cards.
pub async fn handle_compare(
    ctx: &CommandContext,
    player_a: &str,
    player_b: &str,
    week: Week,
    as_json: bool,
) -> Result<()> {
    let week = validate_input(player_a, player_b, week)?;
    let source = &ctx.source;

    let (ref_a, ref_b) = resolve_player_ids(source, player_a, player_b).await?;
    let request = CompareRequest {
        player_a: ref_a,
        player_b: ref_b,
        week,
    };
    let result = compare(source, &ctx.options, &request).await?;

    let (card_a, card_b) = tokio::join!(
        build_player_card(source, &request.player_a.name, Some(&request.player_a.id), week),
        build_player_card(source, &request.player_b.name, Some(&request.player_b.id), week),
    );
    let report = CompareReport {
        result,
        cards: [card_a, card_b],
    };

    if as_json {
        print_json(&report)?;
    } else {
        println!("{}", report.result);
        for card in &report.cards {
            println!();
            print!("{}", card);
        }
    }
    Ok(())
}
