//! ID types for Refrain entities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Track identifier
///
/// Opaque id assigned by the streaming API. Never minted locally;
/// equality on it defines track identity throughout the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a new track ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TrackId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_id_from_string() {
        let id = TrackId::new("track-123");
        assert_eq!(id.as_str(), "track-123");
    }

    #[test]
    fn track_id_display() {
        let id = TrackId::new("3f2a");
        assert_eq!(format!("{}", id), "3f2a");
    }

    #[test]
    fn track_id_serde_is_transparent() {
        let id = TrackId::new("abc");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc\"");

        let back: TrackId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(back, id);
    }
}
