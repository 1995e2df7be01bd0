//! Response shapes for the Tank01 NFL stat provider.
//!
//! Tank01 reports almost every number as a string (`"rushYds": "1021"`) and
//! omits categories a player never touched. Every numeric field therefore
//! goes through a lenient deserializer and defaults to zero when absent.

use crate::cli::types::{PlayerId, TeamAbv};
use crate::model::team_form::{Streak, StreakResult, TeamRecord};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use tracing::warn;


fn de_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) if n.is_finite() => n,
        Raw::Number(_) => 0.0,
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .unwrap_or(0.0),
        Raw::Null(()) => 0.0,
    })
}

fn de_lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = de_lenient_f64(deserializer)?;
    if value.is_finite() && value > 0.0 {
        Ok(value as u32)
    } else {
        Ok(0)
    }
}

/// Envelope every provider response is wrapped in.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(rename = "statusCode", default)]
    pub status_code: Option<u16>,
    pub body: T,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RushingLine {
    #[serde(rename = "rushYds", default, deserialize_with = "de_lenient_f64")]
    pub rush_yds: f64,
    #[serde(rename = "rushTD", default, deserialize_with = "de_lenient_f64")]
    pub rush_td: f64,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub carries: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PassingLine {
    #[serde(rename = "passYds", default, deserialize_with = "de_lenient_f64")]
    pub pass_yds: f64,
    #[serde(rename = "passTD", default, deserialize_with = "de_lenient_f64")]
    pub pass_td: f64,
    #[serde(rename = "int", default, deserialize_with = "de_lenient_f64")]
    pub interceptions: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ReceivingLine {
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub receptions: f64,
    #[serde(rename = "recYds", default, deserialize_with = "de_lenient_f64")]
    pub rec_yds: f64,
    #[serde(rename = "recTD", default, deserialize_with = "de_lenient_f64")]
    pub rec_td: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct KickingLine {
    #[serde(rename = "fgMade", default, deserialize_with = "de_lenient_f64")]
    pub fg_made: f64,
    #[serde(rename = "fgMissed", default, deserialize_with = "de_lenient_f64")]
    pub fg_missed: f64,
    #[serde(rename = "xpMade", default, deserialize_with = "de_lenient_f64")]
    pub xp_made: f64,
    #[serde(rename = "xpMissed", default, deserialize_with = "de_lenient_f64")]
    pub xp_missed: f64,
}

/// Predicted totals for one player (season-long or a single week).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SeasonProjection {
    #[serde(rename = "playerID", default)]
    pub player_id: PlayerId,
    #[serde(rename = "longName", default)]
    pub long_name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub pos: String,
    #[serde(rename = "Rushing", default)]
    pub rushing: RushingLine,
    #[serde(rename = "Passing", default)]
    pub passing: PassingLine,
    #[serde(rename = "Receiving", default)]
    pub receiving: ReceivingLine,
    #[serde(rename = "Kicking", default)]
    pub kicking: KickingLine,
    #[serde(rename = "fumblesLost", default, deserialize_with = "de_lenient_f64")]
    pub fumbles_lost: f64,
    #[serde(rename = "twoPointConversion", default, deserialize_with = "de_lenient_f64")]
    pub two_point_conversion: f64,
}

/// `getNFLProjections` returns a keyed map for season/team queries and a
/// bare projection object when filtered to one player.
///
/// Keyed entries are held as raw JSON and decoded one at a time so a single
/// malformed player cannot take the rest of the set down with it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProjectionBody {
    Many {
        #[serde(rename = "playerProjections")]
        player_projections: BTreeMap<String, serde_json::Value>,
    },
    Single(SeasonProjection),
}

impl ProjectionBody {
    /// Flatten into a list, filling in IDs from map keys where the record
    /// itself omits them. Entries that fail to decode are logged and skipped;
    /// a bare object with no player ID is not a projection and yields nothing.
    pub fn into_projections(self) -> Vec<SeasonProjection> {
        match self {
            ProjectionBody::Many { player_projections } => player_projections
                .into_iter()
                .filter_map(|(key, raw)| {
                    match serde_json::from_value::<SeasonProjection>(raw) {
                        Ok(mut projection) => {
                            if projection.player_id.is_empty() {
                                projection.player_id = PlayerId::new(key);
                            }
                            Some(projection)
                        }
                        Err(err) => {
                            warn!(player_id = %key, error = %err, "skipping malformed projection");
                            None
                        }
                    }
                })
                .collect(),
            ProjectionBody::Single(projection) if projection.player_id.is_empty() => {
                warn!("projection body carried no player ID; treating as empty");
                Vec::new()
            }
            ProjectionBody::Single(projection) => vec![projection],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawStreak {
    #[serde(default)]
    pub result: String,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub length: u32,
}

/// Season totals a defense has allowed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DefenseStats {
    #[serde(rename = "passingYardsAllowed", default, deserialize_with = "de_lenient_f64")]
    pub passing_yards_allowed: f64,
    #[serde(rename = "passingTDAllowed", default, deserialize_with = "de_lenient_f64")]
    pub passing_td_allowed: f64,
    #[serde(rename = "defensiveInterceptions", default, deserialize_with = "de_lenient_f64")]
    pub defensive_interceptions: f64,
    #[serde(rename = "rushingYardsAllowed", default, deserialize_with = "de_lenient_f64")]
    pub rushing_yards_allowed: f64,
    #[serde(rename = "rushingTDAllowed", default, deserialize_with = "de_lenient_f64")]
    pub rushing_td_allowed: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TeamStats {
    #[serde(rename = "Defense", default)]
    pub defense: DefenseStats,
}

/// One entry from `getNFLTeams`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamInfo {
    #[serde(rename = "teamAbv")]
    pub team_abv: String,
    #[serde(rename = "teamCity", default)]
    pub team_city: String,
    #[serde(rename = "teamName", default)]
    pub team_name: String,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub wins: u32,
    #[serde(rename = "loss", default, deserialize_with = "de_lenient_u32")]
    pub losses: u32,
    #[serde(rename = "currentStreak", default)]
    pub current_streak: RawStreak,
    #[serde(rename = "nflComLogo1", default)]
    pub logo: Option<String>,
    #[serde(rename = "teamStats", default)]
    pub team_stats: Option<TeamStats>,
}

impl TeamInfo {
    pub fn record(&self) -> TeamRecord {
        TeamRecord {
            team: TeamAbv::new(&self.team_abv),
            wins: self.wins,
            losses: self.losses,
            streak: Streak {
                result: StreakResult::from_code(&self.current_streak.result),
                length: self.current_streak.length,
            },
        }
    }

    pub fn defense(&self) -> Option<&DefenseStats> {
        self.team_stats.as_ref().map(|stats| &stats.defense)
    }
}

/// Find a team by abbreviation, ignoring case.
pub fn find_team<'a>(teams: &'a [TeamInfo], abv: &str) -> Option<&'a TeamInfo> {
    teams
        .iter()
        .find(|team| team.team_abv.trim().eq_ignore_ascii_case(abv.trim()))
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FantasyPointsDefault {
    #[serde(rename = "PPR", default, deserialize_with = "de_lenient_f64")]
    pub ppr: f64,
    #[serde(rename = "halfPPR", default, deserialize_with = "de_lenient_f64")]
    pub half_ppr: f64,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub standard: f64,
}

/// A single game from a player's log.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GameLog {
    #[serde(rename = "gameID", default)]
    pub game_id: String,
    #[serde(default)]
    pub team: String,
    #[serde(rename = "Rushing", default)]
    pub rushing: RushingLine,
    #[serde(rename = "Passing", default)]
    pub passing: PassingLine,
    #[serde(rename = "Receiving", default)]
    pub receiving: ReceivingLine,
    #[serde(rename = "fumblesLost", default, deserialize_with = "de_lenient_f64")]
    pub fumbles_lost: f64,
    #[serde(rename = "fantasyPointsDefault", default)]
    pub fantasy_points: FantasyPointsDefault,
}

/// `getNFLGamesForPlayer` keys games by game ID; an empty log sometimes
/// arrives as `[]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GamesBody {
    Keyed(BTreeMap<String, GameLog>),
    Listed(Vec<GameLog>),
}

/// A player's most recent games, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecentGames {
    games: Vec<GameLog>,
}

impl RecentGames {
    /// Game IDs start with `YYYYMMDD`, so sorting them descending yields
    /// reverse-chronological order regardless of payload ordering.
    pub fn from_body(body: GamesBody, limit: Option<usize>) -> Self {
        let mut games: Vec<GameLog> = match body {
            GamesBody::Keyed(map) => map
                .into_iter()
                .map(|(key, mut game)| {
                    if game.game_id.is_empty() {
                        game.game_id = key;
                    }
                    game
                })
                .collect(),
            GamesBody::Listed(list) => list,
        };
        games.sort_by(|a, b| b.game_id.cmp(&a.game_id));
        if let Some(n) = limit {
            games.truncate(n);
        }
        Self { games }
    }

    /// Build from games already ordered newest first.
    pub fn from_games(games: Vec<GameLog>) -> Self {
        Self { games }
    }

    pub fn last_game(&self) -> Option<&GameLog> {
        self.games.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameLog> {
        self.games.iter()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ScheduledGame {
    #[serde(rename = "gameID", default)]
    pub game_id: String,
    pub home: String,
    pub away: String,
}

/// Home/away pairings for one week.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeeklySchedule {
    pub games: Vec<ScheduledGame>,
}

impl WeeklySchedule {
    pub fn new(games: Vec<ScheduledGame>) -> Self {
        Self { games }
    }

    /// Opponent of `team` in the first game it appears in.
    pub fn opponent_of(&self, team: &TeamAbv) -> Option<TeamAbv> {
        self.games.iter().find_map(|game| {
            if team.matches(&game.home) {
                Some(TeamAbv::new(&game.away))
            } else if team.matches(&game.away) {
                Some(TeamAbv::new(&game.home))
            } else {
                None
            }
        })
    }
}

/// Display details from `getNFLPlayerInfo`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlayerInfo {
    #[serde(rename = "playerID", default)]
    pub player_id: PlayerId,
    #[serde(rename = "longName", default)]
    pub long_name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub pos: String,
    #[serde(rename = "espnHeadshot", default)]
    pub headshot: Option<String>,
}

/// `getNFLPlayerInfo` answers a name search with a list, or a single
/// object on an exact hit.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PlayerInfoBody {
    Listed(Vec<PlayerInfo>),
    Single(PlayerInfo),
}

impl PlayerInfoBody {
    /// With a known `id`, only the record carrying that ID qualifies; name
    /// searches return every namesake. Otherwise prefer an exact
    /// (case-insensitive) name match, else the first hit.
    pub fn best_match(self, name: &str, id: Option<&PlayerId>) -> Option<PlayerInfo> {
        let candidates = match self {
            PlayerInfoBody::Listed(list) => list,
            PlayerInfoBody::Single(info) => vec![info],
        };
        if let Some(id) = id {
            return candidates.into_iter().find(|info| &info.player_id == id);
        }
        let wanted = name.trim().to_lowercase();
        let exact = candidates
            .iter()
            .position(|info| info.long_name.trim().to_lowercase() == wanted);
        let index = exact.unwrap_or(0);
        candidates.into_iter().nth(index)
    }
}
