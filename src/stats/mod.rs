//! Stat source adapter for the Tank01 NFL API.
//!
//! - `http`: raw endpoint calls returning `Result`
//! - `source`: the [`StatSource`] trait and its "unavailable on failure" HTTP implementation
//! - `types`: response shapes with zero-defaulted numeric fields
//! - `lookup`: player resolution by display name

pub mod http;
pub mod lookup;
pub mod source;
pub mod types;

pub use http::{ProjectionQuery, ProjectionWeek, StatClient};
pub use lookup::{find_player_id, find_projection, player_lookup_by_name};
pub use source::{StatSource, TeamQuery};
