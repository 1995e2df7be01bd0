//! Request-scoped memoization for stat source reads
//!
//! One comparison reads the season projections, team list and weekly
//! schedule more than once. [`RequestCache`] wraps any [`StatSource`] and
//! answers repeated identical reads from small in-memory LRU maps. It holds
//! no state beyond its own lifetime, so build a fresh one per request.
//!
//! Concurrent reads of the same key share one upstream call: the first
//! caller fetches while the others wait on the same cell. Only successful
//! reads are stored; an "unavailable" answer is retried on the next call.

use async_trait::async_trait;
use lru::LruCache;
use std::{
    future::Future,
    hash::Hash,
    num::NonZeroUsize,
    sync::{Arc, Mutex},
};
use tokio::sync::OnceCell;
use tracing::trace;

use crate::{
    cli::types::{PlayerId, SeasonType, Week},
    stats::{
        http::{ProjectionQuery, ProjectionWeek},
        source::{StatSource, TeamQuery},
        types::{PlayerInfo, RecentGames, SeasonProjection, TeamInfo, WeeklySchedule},
    },
};

const DEFAULT_CAPACITY: usize = 16;

/// A single LRU map of once-filled cells, one per key.
struct Memo<K, V>
where
    K: Hash + Eq,
{
    kind: &'static str,
    entries: Mutex<LruCache<K, Arc<OnceCell<V>>>>,
}

impl<K, V> Memo<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    fn new(kind: &'static str, capacity: NonZeroUsize) -> Self {
        Self {
            kind,
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// The cell for `key`, created empty on first use. The lock is released
    /// before the caller awaits anything.
    fn cell(&self, key: K) -> Option<Arc<OnceCell<V>>> {
        let mut entries = self.entries.lock().ok()?;
        Some(Arc::clone(
            entries.get_or_insert(key, || Arc::new(OnceCell::new())),
        ))
    }

    /// Memoized value for `key`, running `fetch` at most once at a time.
    /// A `None` from `fetch` leaves the cell empty for the next caller.
    async fn get_or_fetch<F, Fut>(&self, key: K, fetch: F) -> Option<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<V>>,
    {
        let Some(cell) = self.cell(key) else {
            return fetch().await;
        };
        if let Some(hit) = cell.get() {
            trace!(kind = self.kind, "served from request cache");
            return Some(hit.clone());
        }
        cell.get_or_try_init(|| async { fetch().await.ok_or(()) })
            .await
            .ok()
            .cloned()
    }

    fn len(&self) -> usize {
        self.entries
            .lock()
            .map(|entries| entries.iter().filter(|(_, cell)| cell.initialized()).count())
            .unwrap_or(0)
    }
}

/// Memoizing wrapper around a [`StatSource`].
pub struct RequestCache<S> {
    inner: S,
    projections: Memo<(ProjectionQuery, ProjectionWeek), Vec<SeasonProjection>>,
    teams: Memo<TeamQuery, Vec<TeamInfo>>,
    games: Memo<(PlayerId, Option<u16>), RecentGames>,
    schedules: Memo<(Week, SeasonType), WeeklySchedule>,
    players: Memo<(String, Option<PlayerId>), PlayerInfo>,
}

impl<S> RequestCache<S>
where
    S: StatSource,
{
    pub fn new(inner: S) -> Self {
        Self::with_capacity(inner, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(inner: S, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            projections: Memo::new("projections", capacity),
            teams: Memo::new("teams", capacity),
            games: Memo::new("recent_games", capacity),
            schedules: Memo::new("week_schedule", capacity),
            players: Memo::new("player_info", capacity),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Total number of memoized reads across all query kinds.
    pub fn cached_entries(&self) -> usize {
        self.projections.len()
            + self.teams.len()
            + self.games.len()
            + self.schedules.len()
            + self.players.len()
    }
}

#[async_trait]
impl<S> StatSource for RequestCache<S>
where
    S: StatSource,
{
    async fn projections(
        &self,
        query: &ProjectionQuery,
        week: ProjectionWeek,
    ) -> Option<Vec<SeasonProjection>> {
        self.projections
            .get_or_fetch((query.clone(), week), || self.inner.projections(query, week))
            .await
    }

    async fn teams(&self, query: &TeamQuery) -> Option<Vec<TeamInfo>> {
        self.teams
            .get_or_fetch(query.clone(), || self.inner.teams(query))
            .await
    }

    async fn recent_games(&self, player: &PlayerId, limit: Option<u16>) -> Option<RecentGames> {
        self.games
            .get_or_fetch((player.clone(), limit), || {
                self.inner.recent_games(player, limit)
            })
            .await
    }

    async fn week_schedule(&self, week: Week, season_type: SeasonType) -> Option<WeeklySchedule> {
        self.schedules
            .get_or_fetch((week, season_type), || {
                self.inner.week_schedule(week, season_type)
            })
            .await
    }

    async fn player_info(&self, name: &str, id: Option<&PlayerId>) -> Option<PlayerInfo> {
        let key = (name.trim().to_lowercase(), id.cloned());
        self.players
            .get_or_fetch(key, || self.inner.player_info(name, id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::types::ScheduledGame;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
        fail_schedule: bool,
    }

    #[async_trait]
    impl StatSource for CountingSource {
        async fn projections(
            &self,
            _query: &ProjectionQuery,
            _week: ProjectionWeek,
        ) -> Option<Vec<SeasonProjection>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Some(vec![SeasonProjection::default()])
        }

        async fn teams(&self, _query: &TeamQuery) -> Option<Vec<TeamInfo>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Some(Vec::new())
        }

        async fn recent_games(&self, _player: &PlayerId, _limit: Option<u16>) -> Option<RecentGames> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Some(RecentGames::default())
        }

        async fn week_schedule(&self, _week: Week, _season_type: SeasonType) -> Option<WeeklySchedule> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            if self.fail_schedule {
                None
            } else {
                Some(WeeklySchedule::new(vec![ScheduledGame {
                    game_id: "20241020_NYJ@PIT".to_string(),
                    home: "PIT".to_string(),
                    away: "NYJ".to_string(),
                }]))
            }
        }

        async fn player_info(&self, _name: &str, _id: Option<&PlayerId>) -> Option<PlayerInfo> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Some(PlayerInfo::default())
        }
    }

    #[tokio::test]
    async fn test_repeated_reads_hit_inner_once() {
        let cache = RequestCache::new(CountingSource::default());

        for _ in 0..3 {
            cache
                .projections(&ProjectionQuery::All, ProjectionWeek::Season)
                .await
                .unwrap();
            cache.teams(&TeamQuery::standings()).await.unwrap();
            cache
                .week_schedule(Week::new(5), SeasonType::Regular)
                .await
                .unwrap();
        }

        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 3);
        assert_eq!(cache.cached_entries(), 3);
    }

    #[tokio::test]
    async fn test_distinct_keys_are_separate_entries() {
        let cache = RequestCache::new(CountingSource::default());

        cache
            .recent_games(&PlayerId::new("1"), Some(4))
            .await
            .unwrap();
        cache
            .recent_games(&PlayerId::new("2"), Some(4))
            .await
            .unwrap();
        cache
            .recent_games(&PlayerId::new("1"), Some(4))
            .await
            .unwrap();
        cache.player_info("Josh Allen", None).await.unwrap();
        cache.player_info("josh allen ", None).await.unwrap();
        cache
            .player_info("Josh Allen", Some(&PlayerId::new("3918298")))
            .await
            .unwrap();

        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_unavailable_reads_are_not_cached() {
        let cache = RequestCache::new(CountingSource {
            fail_schedule: true,
            ..Default::default()
        });

        assert!(cache
            .week_schedule(Week::new(5), SeasonType::Regular)
            .await
            .is_none());
        assert!(cache
            .week_schedule(Week::new(5), SeasonType::Regular)
            .await
            .is_none());

        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.cached_entries(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_reads_share_one_fetch() {
        let cache = RequestCache::new(CountingSource::default());

        let (a, b) = tokio::join!(
            cache.week_schedule(Week::new(5), SeasonType::Regular),
            cache.week_schedule(Week::new(5), SeasonType::Regular),
        );

        assert_eq!(a.unwrap(), b.unwrap());
        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.cached_entries(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_unavailable_reads_both_retry() {
        let cache = RequestCache::new(CountingSource {
            fail_schedule: true,
            ..Default::default()
        });

        let (a, b) = tokio::join!(
            cache.week_schedule(Week::new(5), SeasonType::Regular),
            cache.week_schedule(Week::new(5), SeasonType::Regular),
        );

        assert!(a.is_none());
        assert!(b.is_none());
        assert_eq!(cache.inner().calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.cached_entries(), 0);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let cache = RequestCache::with_capacity(CountingSource::default(), 0);
        assert_eq!(cache.cached_entries(), 0);
    }
}
