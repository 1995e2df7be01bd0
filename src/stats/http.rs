//! Thin HTTP client over the Tank01 NFL endpoints.
//!
//! Every call here returns `Result`; turning failures into "unavailable"
//! happens one layer up in [`crate::stats::source`].

use reqwest::{header::HeaderMap, Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::{PlayerId, Season, SeasonType, Week},
    config::ProviderConfig,
    core::http::provider_headers,
    error::FflError,
    stats::types::{
        Envelope, GamesBody, PlayerInfoBody, ProjectionBody, ScheduledGame, TeamInfo,
    },
    Result,
};


pub const PROJECTIONS_ENDPOINT: &str = "getNFLProjections";
pub const TEAMS_ENDPOINT: &str = "getNFLTeams";
pub const PLAYER_GAMES_ENDPOINT: &str = "getNFLGamesForPlayer";
pub const WEEK_GAMES_ENDPOINT: &str = "getNFLGamesForWeek";
pub const PLAYER_INFO_ENDPOINT: &str = "getNFLPlayerInfo";

/// Which players a projection request covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectionQuery {
    All,
    Player(PlayerId),
    Team(String),
}

/// Season-long totals or a single week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionWeek {
    Season,
    Week(Week),
}

impl ProjectionWeek {
    fn as_param(&self) -> String {
        match self {
            ProjectionWeek::Season => "season".to_string(),
            ProjectionWeek::Week(w) => w.to_string(),
        }
    }
}

/// Request parameters for `getNFLTeams`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TeamRequest {
    pub sort_by: Option<String>,
    pub include_stats: bool,
    pub stats_season: Season,
}

impl TeamRequest {
    fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("rosters".to_string(), "false".to_string()),
            ("schedules".to_string(), "false".to_string()),
            ("topPerformers".to_string(), "false".to_string()),
            ("teamStats".to_string(), self.include_stats.to_string()),
            ("teamStatsSeason".to_string(), self.stats_season.to_string()),
        ];
        if let Some(sort_by) = &self.sort_by {
            params.push(("sortBy".to_string(), sort_by.clone()));
        }
        params
    }
}

/// HTTP client bound to one provider configuration.
pub struct StatClient {
    client: Client,
    headers: HeaderMap,
    config: ProviderConfig,
}

impl StatClient {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("ffl-compare/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()?;
        let headers = provider_headers(&config)?;

        Ok(Self {
            client,
            headers,
            config,
        })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    async fn get_body<T>(&self, endpoint: &str, params: &[(String, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.config.base_url(), endpoint);
        debug!(%url, ?params, "stat provider request");

        let envelope = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<Envelope<T>>()
            .await?;

        match envelope.status_code {
            Some(status) if status != 200 => Err(FflError::Provider {
                endpoint: endpoint.to_string(),
                status,
            }),
            _ => Ok(envelope.body),
        }
    }

    /// `GET getNFLProjections` with the configured scoring weights.
    pub async fn fetch_projections(
        &self,
        query: &ProjectionQuery,
        week: ProjectionWeek,
    ) -> Result<ProjectionBody> {
        let mut params = vec![
            ("week".to_string(), week.as_param()),
            ("archiveSeason".to_string(), self.config.season.to_string()),
        ];
        match query {
            ProjectionQuery::All => {}
            ProjectionQuery::Player(id) => params.push(("playerID".to_string(), id.to_string())),
            ProjectionQuery::Team(team) => params.push(("teamID".to_string(), team.clone())),
        }
        params.extend(self.config.weights.to_query_params());

        self.get_body(PROJECTIONS_ENDPOINT, &params).await
    }

    /// `GET getNFLTeams`.
    pub async fn fetch_teams(&self, request: &TeamRequest) -> Result<Vec<TeamInfo>> {
        self.get_body(TEAMS_ENDPOINT, &request.to_params()).await
    }

    /// `GET getNFLGamesForPlayer`, optionally capped at the `limit` most recent games.
    pub async fn fetch_games_for_player(
        &self,
        player: &PlayerId,
        limit: Option<u16>,
    ) -> Result<GamesBody> {
        let mut params = vec![
            ("playerID".to_string(), player.to_string()),
            ("fantasyPoints".to_string(), "true".to_string()),
        ];
        if let Some(n) = limit {
            params.push(("numberOfGames".to_string(), n.to_string()));
        }
        self.get_body(PLAYER_GAMES_ENDPOINT, &params).await
    }

    /// `GET getNFLGamesForWeek`.
    pub async fn fetch_games_for_week(
        &self,
        week: Week,
        season_type: SeasonType,
    ) -> Result<Vec<ScheduledGame>> {
        let params = vec![
            ("week".to_string(), week.to_string()),
            ("seasonType".to_string(), season_type.as_param().to_string()),
            ("season".to_string(), self.config.season.to_string()),
        ];
        self.get_body(WEEK_GAMES_ENDPOINT, &params).await
    }

    /// `GET getNFLPlayerInfo` by display name.
    pub async fn fetch_player_info(&self, name: &str) -> Result<PlayerInfoBody> {
        let params = vec![
            ("playerName".to_string(), name.trim().to_string()),
            ("getStats".to_string(), "false".to_string()),
        ];
        self.get_body(PLAYER_INFO_ENDPOINT, &params).await
    }
}
