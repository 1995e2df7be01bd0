//! In-memory stat source shared by the command tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    cli::types::{PlayerId, SeasonType, Week},
    stats::{
        http::{ProjectionQuery, ProjectionWeek},
        source::{StatSource, TeamQuery},
        types::{
            DefenseStats, FantasyPointsDefault, GameLog, PassingLine, PlayerInfo, PlayerInfoBody,
            RawStreak, RecentGames, ScheduledGame, SeasonProjection, TeamInfo, TeamStats,
            WeeklySchedule,
        },
    },
};

/// Canned provider data. Anything left `None`/empty reads as unavailable.
#[derive(Default)]
pub(crate) struct FakeSource {
    pub projections: Option<Vec<SeasonProjection>>,
    pub teams: Option<Vec<TeamInfo>>,
    pub games: BTreeMap<PlayerId, Vec<GameLog>>,
    pub schedule: Option<WeeklySchedule>,
    pub players: Vec<PlayerInfo>,
    pub(crate) calls: AtomicUsize,
}

impl FakeSource {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    pub fn team(abv: &str, wins: u32, losses: u32) -> TeamInfo {
        TeamInfo {
            team_abv: abv.to_string(),
            team_city: String::new(),
            team_name: String::new(),
            wins,
            losses,
            current_streak: RawStreak {
                result: "W".to_string(),
                length: 1,
            },
            logo: Some(format!("https://static.www.nfl.com/league/logos/{abv}.svg")),
            team_stats: Some(TeamStats {
                defense: DefenseStats {
                    passing_yards_allowed: 500.0,
                    passing_td_allowed: 4.0,
                    defensive_interceptions: 2.0,
                    rushing_yards_allowed: 300.0,
                    rushing_td_allowed: 2.0,
                },
            }),
        }
    }

    pub fn projection(id: &str, name: &str, team: &str, pos: &str, pass_yds: f64) -> SeasonProjection {
        SeasonProjection {
            player_id: PlayerId::new(id),
            long_name: name.to_string(),
            team: team.to_string(),
            pos: pos.to_string(),
            passing: PassingLine {
                pass_yds,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn game(id: &str, ppr: f64) -> GameLog {
        GameLog {
            game_id: id.to_string(),
            fantasy_points: FantasyPointsDefault {
                ppr,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn scheduled(home: &str, away: &str) -> ScheduledGame {
        ScheduledGame {
            game_id: format!("20240915_{away}@{home}"),
            home: home.to_string(),
            away: away.to_string(),
        }
    }

    /// Josh Allen (BUF, 10-0 W2) against Lamar Jackson (BAL, 6-3 L2); Allen
    /// is ahead on every input.
    pub fn two_quarterbacks() -> Self {
        let mut buf = Self::team("BUF", 10, 0);
        buf.current_streak = RawStreak {
            result: "W".to_string(),
            length: 2,
        };
        let mut bal = Self::team("BAL", 6, 3);
        bal.current_streak = RawStreak {
            result: "L".to_string(),
            length: 2,
        };

        let mut games = BTreeMap::new();
        games.insert(
            PlayerId::new("3918298"),
            vec![
                Self::game("20240915_BUF@MIA", 25.0),
                Self::game("20240908_ARI@BUF", 20.0),
            ],
        );
        games.insert(
            PlayerId::new("3916387"),
            vec![
                Self::game("20240915_LV@BAL", 10.0),
                Self::game("20240905_BAL@KC", 12.0),
            ],
        );

        Self {
            projections: Some(vec![
                Self::projection("3918298", "Josh Allen", "BUF", "QB", 4250.0),
                Self::projection("3916387", "Lamar Jackson", "BAL", "QB", 3400.0),
            ]),
            teams: Some(vec![
                buf,
                bal,
                Self::team("MIA", 5, 2),
                Self::team("CIN", 5, 2),
            ]),
            games,
            schedule: Some(WeeklySchedule::new(vec![
                Self::scheduled("MIA", "BUF"),
                Self::scheduled("BAL", "CIN"),
            ])),
            players: vec![
                PlayerInfo {
                    player_id: PlayerId::new("3918298"),
                    long_name: "Josh Allen".to_string(),
                    team: "BUF".to_string(),
                    pos: "QB".to_string(),
                    headshot: Some(
                        "https://a.espncdn.com/i/headshots/nfl/players/full/3918298.png"
                            .to_string(),
                    ),
                },
                PlayerInfo {
                    player_id: PlayerId::new("3916387"),
                    long_name: "Lamar Jackson".to_string(),
                    team: "BAL".to_string(),
                    pos: "QB".to_string(),
                    headshot: None,
                },
            ],
            calls: AtomicUsize::new(0),
        }
    }

    /// Two players with identical projections, team and recent games.
    pub fn identical_pair() -> Self {
        let games = vec![
            Self::game("20240915_BUF@MIA", 15.0),
            Self::game("20240908_ARI@BUF", 15.0),
        ];
        let mut by_player = BTreeMap::new();
        by_player.insert(PlayerId::new("1"), games.clone());
        by_player.insert(PlayerId::new("2"), games);

        Self {
            projections: Some(vec![
                Self::projection("1", "Player A", "BUF", "WR", 2000.0),
                Self::projection("2", "Player B", "BUF", "WR", 2000.0),
            ]),
            teams: Some(vec![Self::team("BUF", 4, 4), Self::team("MIA", 5, 3)]),
            games: by_player,
            schedule: Some(WeeklySchedule::new(vec![Self::scheduled("MIA", "BUF")])),
            players: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl StatSource for FakeSource {
    async fn projections(
        &self,
        query: &ProjectionQuery,
        _week: ProjectionWeek,
    ) -> Option<Vec<SeasonProjection>> {
        self.record_call();
        let all = self.projections.clone()?;
        Some(match query {
            ProjectionQuery::All => all,
            ProjectionQuery::Player(id) => all.into_iter().filter(|p| &p.player_id == id).collect(),
            ProjectionQuery::Team(abv) => all
                .into_iter()
                .filter(|p| p.team.eq_ignore_ascii_case(abv))
                .collect(),
        })
    }

    async fn teams(&self, _query: &TeamQuery) -> Option<Vec<TeamInfo>> {
        self.record_call();
        self.teams.clone()
    }

    async fn recent_games(&self, player: &PlayerId, limit: Option<u16>) -> Option<RecentGames> {
        self.record_call();
        let mut games = self.games.get(player)?.clone();
        if let Some(n) = limit {
            games.truncate(usize::from(n));
        }
        Some(RecentGames::from_games(games))
    }

    async fn week_schedule(&self, _week: Week, _season_type: SeasonType) -> Option<WeeklySchedule> {
        self.record_call();
        self.schedule.clone()
    }

    async fn player_info(&self, name: &str, id: Option<&PlayerId>) -> Option<PlayerInfo> {
        self.record_call();
        let wanted = name.trim().to_lowercase();
        let namesakes: Vec<PlayerInfo> = self
            .players
            .iter()
            .filter(|p| p.long_name.to_lowercase() == wanted)
            .cloned()
            .collect();
        if namesakes.is_empty() {
            return None;
        }
        PlayerInfoBody::Listed(namesakes).best_match(name, id)
    }
}

mod common_tests {
    use super::*;
    use crate::commands::{common::resolve_player_ids, CompareError};

    #[tokio::test]
    async fn test_resolve_player_ids() {
        let source = FakeSource::two_quarterbacks();
        let (a, b) = resolve_player_ids(&source, "josh allen", " Lamar Jackson ")
            .await
            .unwrap();

        assert_eq!(a.id, PlayerId::new("3918298"));
        assert_eq!(a.name, "josh allen");
        assert_eq!(b.id, PlayerId::new("3916387"));
        assert_eq!(b.name, "Lamar Jackson");
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_resolve_player_ids_not_found() {
        let source = FakeSource::two_quarterbacks();
        let err = resolve_player_ids(&source, "Josh Allen", "Tom Brady")
            .await
            .unwrap_err();
        assert_eq!(err, CompareError::PlayerNotFound);
        assert_eq!(err.to_string(), "Error: Could not find one or both players.");
    }

    #[tokio::test]
    async fn test_resolve_player_ids_without_projections() {
        let source = FakeSource::default();
        let err = resolve_player_ids(&source, "Josh Allen", "Lamar Jackson")
            .await
            .unwrap_err();
        assert_eq!(err, CompareError::Projections);
    }
}
