//! The read-only query surface the comparison model consumes.
//!
//! Implementations never surface errors: a failed or malformed read is logged
//! and reported as `None` ("unavailable") so callers can short-circuit with a
//! user-facing message.

use async_trait::async_trait;
use tracing::warn;

use crate::{
    cli::types::{PlayerId, SeasonType, TeamAbv, Week},
    error::FflError,
    stats::{
        http::{ProjectionQuery, ProjectionWeek, StatClient, TeamRequest},
        types::{PlayerInfo, RecentGames, SeasonProjection, TeamInfo, WeeklySchedule},
    },
};

/// Team list options; the stats season comes from the adapter's configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TeamQuery {
    pub sort_by: Option<String>,
    pub include_stats: bool,
}

impl TeamQuery {
    /// Records and streaks only.
    pub fn standings() -> Self {
        Self::default()
    }

    /// Full team list sorted around `team`, with season stat blocks.
    pub fn with_stats(team: &TeamAbv) -> Self {
        Self {
            sort_by: Some(team.to_string()),
            include_stats: true,
        }
    }
}

#[async_trait]
pub trait StatSource: Send + Sync {
    async fn projections(
        &self,
        query: &ProjectionQuery,
        week: ProjectionWeek,
    ) -> Option<Vec<SeasonProjection>>;

    async fn teams(&self, query: &TeamQuery) -> Option<Vec<TeamInfo>>;

    /// Most recent games first, capped at `limit` when given.
    async fn recent_games(&self, player: &PlayerId, limit: Option<u16>) -> Option<RecentGames>;

    async fn week_schedule(&self, week: Week, season_type: SeasonType) -> Option<WeeklySchedule>;

    /// Display details for `name`. A known `id` pins the answer to that
    /// player when several share the name.
    async fn player_info(&self, name: &str, id: Option<&PlayerId>) -> Option<PlayerInfo>;
}

fn available<T>(operation: &str, result: Result<T, FflError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(operation, error = %err, "stat provider read failed; treating as unavailable");
            None
        }
    }
}

#[async_trait]
impl StatSource for StatClient {
    async fn projections(
        &self,
        query: &ProjectionQuery,
        week: ProjectionWeek,
    ) -> Option<Vec<SeasonProjection>> {
        available("projections", self.fetch_projections(query, week).await)
            .map(|body| body.into_projections())
    }

    async fn teams(&self, query: &TeamQuery) -> Option<Vec<TeamInfo>> {
        let request = TeamRequest {
            sort_by: query.sort_by.clone(),
            include_stats: query.include_stats,
            stats_season: self.config().season,
        };
        available("teams", self.fetch_teams(&request).await)
    }

    async fn recent_games(&self, player: &PlayerId, limit: Option<u16>) -> Option<RecentGames> {
        available(
            "recent_games",
            self.fetch_games_for_player(player, limit).await,
        )
        .map(|body| RecentGames::from_body(body, limit.map(usize::from)))
    }

    async fn week_schedule(&self, week: Week, season_type: SeasonType) -> Option<WeeklySchedule> {
        available(
            "week_schedule",
            self.fetch_games_for_week(week, season_type).await,
        )
        .map(WeeklySchedule::new)
    }

    async fn player_info(&self, name: &str, id: Option<&PlayerId>) -> Option<PlayerInfo> {
        available("player_info", self.fetch_player_info(name).await)
            .and_then(|body| body.best_match(name, id))
    }
}
