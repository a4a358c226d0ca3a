//! Core types for the playback transport

use refrain_core::TrackId;
use serde::{Deserialize, Serialize};

/// Lifecycle state of the audio resource binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceState {
    /// No track bound
    Idle,

    /// Load issued, waiting for the resource to report readiness
    Binding,

    /// Loaded with known metadata, not yet playing
    Ready,

    /// Audio is playing
    Playing,

    /// Paused mid-track
    Paused,

    /// The track ran to completion
    Ended,

    /// The load or the resource failed; a new bind is required to recover
    Failed,
}

impl ResourceState {
    /// Whether a resource is bound and position data is meaningful
    pub fn is_bound(self) -> bool {
        matches!(
            self,
            ResourceState::Ready
                | ResourceState::Playing
                | ResourceState::Paused
                | ResourceState::Ended
        )
    }

    /// Whether a seek is accepted in this state
    pub fn can_seek(self) -> bool {
        matches!(
            self,
            ResourceState::Ready | ResourceState::Playing | ResourceState::Paused
        )
    }
}

/// Configuration for the transport controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Start playback as soon as a bind reaches Ready (default: true)
    ///
    /// Switching tracks starts the new one immediately; turning this off
    /// leaves every fresh bind waiting in Ready for an explicit play.
    pub autoplay_on_ready: bool,

    /// Initial volume level (0.0-1.0, default: 1.0)
    pub initial_volume: f32,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            autoplay_on_ready: true,
            initial_volume: 1.0,
        }
    }
}

/// UI-facing read model of the playback session
///
/// A value snapshot taken after dispatching messages; rendering reads this
/// instead of poking at controller internals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Id of the currently bound track (None when idle)
    pub track_id: Option<TrackId>,

    /// Resource lifecycle state
    pub state: ResourceState,

    /// Playback position as a ratio of duration (0.0-1.0)
    pub position_ratio: f64,

    /// Resource-reported duration in seconds, once known
    pub duration_seconds: Option<f64>,

    /// Elapsed playback time in seconds
    pub elapsed_seconds: f64,

    /// Volume level (0.0-1.0)
    pub volume: f32,

    /// Mute state (the volume level is preserved underneath)
    pub muted: bool,

    /// True while a bind is in flight
    pub loading: bool,

    /// Whether a track follows the current one in the sequence
    pub has_next: bool,

    /// Whether a track precedes the current one in the sequence
    pub has_previous: bool,
}
