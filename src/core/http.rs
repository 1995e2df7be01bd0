//! HTTP utilities for stat provider communication

use crate::{config::ProviderConfig, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};

pub const RAPIDAPI_HOST_HEADER: &str = "x-rapidapi-host";
pub const RAPIDAPI_KEY_HEADER: &str = "x-rapidapi-key";

/// Build the RapidAPI authentication headers sent with every provider request.
pub fn provider_headers(config: &ProviderConfig) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(
        HeaderName::from_static(RAPIDAPI_HOST_HEADER),
        HeaderValue::from_str(&config.host)?,
    );
    let mut key = HeaderValue::from_str(&config.api_key)?;
    key.set_sensitive(true);
    h.insert(HeaderName::from_static(RAPIDAPI_KEY_HEADER), key);
    Ok(h)
}
