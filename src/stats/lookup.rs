//! Player resolution against the full season-projection set.

use crate::{
    cli::types::PlayerId,
    stats::{
        http::{ProjectionQuery, ProjectionWeek},
        source::StatSource,
        types::SeasonProjection,
    },
};

/// Case-insensitive exact match on the full display name.
pub fn find_player_id(projections: &[SeasonProjection], name: &str) -> Option<PlayerId> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    projections
        .iter()
        .find(|p| p.long_name.trim().to_lowercase() == wanted)
        .map(|p| p.player_id.clone())
}

pub fn find_projection<'a>(
    projections: &'a [SeasonProjection],
    id: &PlayerId,
) -> Option<&'a SeasonProjection> {
    projections.iter().find(|p| &p.player_id == id)
}

/// Scan the season projections for `name`. `None` covers both "not found"
/// and "projections unavailable".
pub async fn player_lookup_by_name<S>(source: &S, name: &str) -> Option<PlayerId>
where
    S: StatSource + ?Sized,
{
    let projections = source
        .projections(&ProjectionQuery::All, ProjectionWeek::Season)
        .await?;
    find_player_id(&projections, name)
}
