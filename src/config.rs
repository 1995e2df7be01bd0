//! Stat provider configuration.
//!
//! Credentials and season settings are injected into the adapter through a
//! [`ProviderConfig`] value instead of process-wide globals. The binary builds
//! one from the environment after loading any `.env` files.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::{
    cli::types::{Season, SeasonType},
    error::{FflError, Result},
    model::points::ScoringWeights,
    API_KEY_ENV_VAR, HOST_ENV_VAR, SEASON_ENV_VAR, SEASON_TYPE_ENV_VAR, TIMEOUT_ENV_VAR,
};

/// RapidAPI host for the Tank01 NFL live statistics API.
pub const DEFAULT_HOST: &str = "tank01-nfl-live-in-game-real-time-statistics-nfl.p.rapidapi.com";

pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Everything the HTTP adapter needs to talk to the stat provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub host: String,
    pub api_key: String,
    pub season: Season,
    pub season_type: SeasonType,
    pub timeout_secs: u64,
    /// Overrides `https://{host}`; used to point the client at a mock server.
    pub base_url: Option<String>,
    pub weights: ScoringWeights,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            api_key: api_key.into(),
            season: Season::default(),
            season_type: SeasonType::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            base_url: None,
            weights: ScoringWeights::default(),
        }
    }

    /// Build a config from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| FflError::MissingApiKey {
                env_var: API_KEY_ENV_VAR.to_string(),
            })?;

        let mut config = Self::new(api_key.trim());

        if let Some(host) = lookup(HOST_ENV_VAR).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(season) = lookup(SEASON_ENV_VAR) {
            config.season = season.parse()?;
        }
        if let Some(season_type) = lookup(SEASON_TYPE_ENV_VAR) {
            config.season_type = season_type.parse()?;
        }
        if let Some(timeout) = lookup(TIMEOUT_ENV_VAR) {
            let secs: u64 = timeout.trim().parse()?;
            if secs == 0 {
                return Err(FflError::Config {
                    message: format!("{} must be greater than zero", TIMEOUT_ENV_VAR),
                });
            }
            config.timeout_secs = secs;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}", self.host),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Path: {config dir}/ffl-compare/.env
pub fn user_env_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("ffl-compare").join(".env")
}

/// Load a single `.env` file if it exists. Variables already set in the
/// process environment win over file values.
pub fn load_env_file(path: &Path) -> Result<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    dotenvy::from_path(path).map_err(|e| FflError::Config {
        message: format!("failed to load {}: {}", path.display(), e),
    })?;
    Ok(true)
}

/// Load `./.env`, then the per-user `.env`. Returns the files that were read.
pub fn load_dotenv() -> Result<Vec<PathBuf>> {
    let mut loaded = Vec::new();
    for path in [PathBuf::from(".env"), user_env_path()] {
        if load_env_file(&path)? {
            debug!(path = %path.display(), "loaded environment file");
            loaded.push(path);
        }
    }
    Ok(loaded)
}
