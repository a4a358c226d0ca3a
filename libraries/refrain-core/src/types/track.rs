//! Track domain type

use crate::types::TrackId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Audio track descriptor from the streaming catalog
///
/// Immutable after fetch; identity is the `id`. Field names mirror the
/// API's JSON payload (camelCase). The catalog duration is a display hint
/// only; the duration reported by the bound audio resource is what
/// progress math runs against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: Option<String>,

    /// Catalog-reported duration in seconds
    pub duration_seconds: f64,

    /// Encoded bitrate in kbit/s
    pub bitrate_kbps: u32,

    /// Server-side path of the audio file
    pub audio_file_path: String,

    /// Cover-image reference, when the track has artwork
    pub cover_image_url: Option<String>,

    /// When the track was uploaded to the library
    pub uploaded_at: DateTime<Utc>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(
        id: impl Into<TrackId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        audio_file_path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            album: None,
            duration_seconds: 0.0,
            bitrate_kbps: 0,
            audio_file_path: audio_file_path.into(),
            cover_image_url: None,
            uploaded_at: Utc::now(),
        }
    }

    /// Get the catalog duration as a `Duration`, when it is usable
    ///
    /// Returns `None` for zero, negative, non-finite, or overlarge values.
    pub fn catalog_duration(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.duration_seconds)
            .ok()
            .filter(|d| !d.is_zero())
    }

    /// Check if the track carries a cover-image reference
    pub fn has_cover(&self) -> bool {
        self.cover_image_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_creation() {
        let track = Track::new("t1", "Test Song", "Test Artist", "/audio/t1.mp3");
        assert_eq!(track.id, TrackId::new("t1"));
        assert_eq!(track.title, "Test Song");
        assert!(track.album.is_none());
        assert!(!track.has_cover());
    }

    #[test]
    fn catalog_duration_guards_degenerate_values() {
        let mut track = Track::new("t1", "Song", "Artist", "/audio/t1.mp3");
        assert_eq!(track.catalog_duration(), None);

        track.duration_seconds = 183.5;
        assert_eq!(track.catalog_duration(), Some(Duration::from_secs_f64(183.5)));

        track.duration_seconds = f64::NAN;
        assert_eq!(track.catalog_duration(), None);

        track.duration_seconds = -1.0;
        assert_eq!(track.catalog_duration(), None);

        track.duration_seconds = 1e300;
        assert_eq!(
            track.catalog_duration(),
            None,
            "Seconds beyond Duration's range must not panic"
        );
    }

    #[test]
    fn deserializes_catalog_payload() {
        // Shape as served by the tracks endpoint
        let json = r#"{
            "id": "9b1f",
            "title": "Night Drive",
            "artist": "The Reverbs",
            "album": "City Lights",
            "durationSeconds": 214.0,
            "bitrateKbps": 320,
            "audioFilePath": "/data/audio/9b1f.mp3",
            "coverImageUrl": "/data/covers/9b1f.jpg",
            "uploadedAt": "2024-11-02T09:30:00Z"
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.id.as_str(), "9b1f");
        assert_eq!(track.album.as_deref(), Some("City Lights"));
        assert_eq!(track.bitrate_kbps, 320);
        assert!(track.has_cover());
    }

    #[test]
    fn deserializes_payload_without_cover() {
        let json = r#"{
            "id": "a0",
            "title": "Untitled",
            "artist": "Unknown",
            "durationSeconds": 60,
            "bitrateKbps": 128,
            "audioFilePath": "/data/audio/a0.mp3",
            "uploadedAt": "2025-01-15T00:00:00Z"
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert!(track.cover_image_url.is_none());
        assert!(track.album.is_none());
    }

    #[test]
    fn serde_round_trip_preserves_camel_case() {
        let mut track = Track::new("t1", "Song", "Artist", "/audio/t1.mp3");
        track.duration_seconds = 120.0;

        let json = serde_json::to_string(&track).unwrap();
        assert!(json.contains("\"durationSeconds\""));
        assert!(json.contains("\"audioFilePath\""));
        assert!(json.contains("\"uploadedAt\""));

        let back: Track = serde_json::from_str(&json).unwrap();
        assert_eq!(back, track);
    }
}
