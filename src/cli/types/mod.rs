//! Type-safe wrappers and enums for NFL stat data.

pub mod ids;
pub mod position;
pub mod time;

pub use ids::{PlayerId, TeamAbv};
pub use position::Position;
pub use time::{Season, SeasonType, Week};
