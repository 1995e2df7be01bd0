//! Fantasy Football Start/Sit Comparison Library
//!
//! Estimates which of two NFL players is the better fantasy start for a given
//! week. Each player gets one composite score built from season projections,
//! team momentum, recent production and the opponent's defense; the higher
//! score is recommended.
//!
//! ## Layout
//!
//! - [`stats`]: the Tank01 NFL API adapter and the [`stats::StatSource`] trait
//! - [`model`]: fantasy points, team form, matchup strength, composite score, decision
//! - [`commands`]: the comparison pipeline and CLI handlers
//! - [`core`]: provider headers and request-scoped memoization
//! - [`config`]: provider configuration from the environment
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ffl_compare::{
//!     commands::{compare, CompareOptions, CompareRequest, PlayerRef},
//!     config::ProviderConfig,
//!     core::RequestCache,
//!     stats::StatClient,
//!     Week,
//! };
//!
//! # async fn example() -> ffl_compare::Result<()> {
//! let config = ProviderConfig::from_env()?;
//! let options = CompareOptions::from_config(&config);
//! let source = RequestCache::new(StatClient::new(config)?);
//!
//! let request = CompareRequest {
//!     player_a: PlayerRef::new("3918298", "Josh Allen"),
//!     player_b: PlayerRef::new("3916387", "Lamar Jackson"),
//!     week: Week::new(7),
//! };
//! let result = compare(&source, &options, &request).await?;
//! println!("{}", result);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export RAPIDAPI_KEY=your-key
//! export FFL_SEASON=2024
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{PlayerId, Position, Season, SeasonType, TeamAbv, Week};
pub use error::{FflError, Result};

pub const API_KEY_ENV_VAR: &str = "RAPIDAPI_KEY";
pub const HOST_ENV_VAR: &str = "RAPIDAPI_HOST";
pub const SEASON_ENV_VAR: &str = "FFL_SEASON";
pub const SEASON_TYPE_ENV_VAR: &str = "FFL_SEASON_TYPE";
pub const TIMEOUT_ENV_VAR: &str = "FFL_HTTP_TIMEOUT_SECS";
