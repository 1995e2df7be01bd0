//! Shared command plumbing: the per-invocation context and name resolution.

use serde::Serialize;
use tracing::debug;

use crate::{
    config::ProviderConfig,
    core::cache::RequestCache,
    stats::{
        http::{ProjectionQuery, ProjectionWeek, StatClient},
        lookup::find_player_id,
        source::StatSource,
    },
    Result,
};

use super::compare::{CompareError, CompareOptions, PlayerRef};

/// Resources every command needs. Built once per CLI invocation, which is
/// also the lifetime of the request cache.
pub struct CommandContext {
    pub source: RequestCache<StatClient>,
    pub options: CompareOptions,
}

impl CommandContext {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let options = CompareOptions::from_config(&config);
        debug!(host = %config.host, season = %config.season, "building stat client");
        let source = RequestCache::new(StatClient::new(config)?);
        Ok(Self { source, options })
    }
}

/// Resolve two display names to provider IDs with a single projections read.
pub async fn resolve_player_ids<S>(
    source: &S,
    name_a: &str,
    name_b: &str,
) -> std::result::Result<(PlayerRef, PlayerRef), CompareError>
where
    S: StatSource + ?Sized,
{
    let projections = source
        .projections(&ProjectionQuery::All, ProjectionWeek::Season)
        .await
        .ok_or(CompareError::Projections)?;

    match (
        find_player_id(&projections, name_a),
        find_player_id(&projections, name_b),
    ) {
        (Some(id_a), Some(id_b)) => Ok((
            PlayerRef {
                id: id_a,
                name: name_a.trim().to_string(),
            },
            PlayerRef {
                id: id_b,
                name: name_b.trim().to_string(),
            },
        )),
        _ => Err(CompareError::PlayerNotFound),
    }
}

pub fn print_json<T>(value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
