//! ID types for the Tank01 NFL stat provider.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque provider-assigned player ID.
///
/// Tank01 hands these out as strings (`"3918298"`), but a few endpoints
/// emit them as bare numbers, so deserialization accepts either.
///
/// # Examples
///
/// ```rust
/// use ffl_compare::PlayerId;
///
/// let id = PlayerId::new("3918298");
/// assert_eq!(id.as_str(), "3918298");
/// assert_eq!(id.to_string(), "3918298");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => PlayerId(s),
            RawId::Number(n) => PlayerId(n.to_string()),
        })
    }
}

/// NFL team abbreviation (`"KC"`, `"SF"`), normalized to upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamAbv(String);

impl TeamAbv {
    pub fn new(abv: &str) -> Self {
        Self(abv.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw provider abbreviation.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl fmt::Display for TeamAbv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
