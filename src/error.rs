//! Error types for the fantasy start/sit comparison tool

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FflError>;


#[derive(Error, Debug)]
pub enum FflError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("API key not provided: set the {env_var} environment variable")]
    MissingApiKey { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Stat provider returned status {status} for {endpoint}")]
    Provider { endpoint: String, status: u16 },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid season type: {value} (expected pre, reg or post)")]
    InvalidSeasonType { value: String },

    #[error("Week {week} has no prior games to score against")]
    InvalidWeek { week: u16 },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Compare(#[from] crate::commands::compare::CompareError),
}
