//! Session events and binding identity
//!
//! Two event vocabularies meet here. `ResourceEvent`s arrive from the audio
//! resource, tagged by the host with the `BindingId` captured at bind time.
//! `SessionEvent`s go out to the hosting UI after the controller has applied
//! a message. The binding tag is what makes discarding stale events a
//! mechanical check instead of per-call-site vigilance.

use crate::types::ResourceState;
use refrain_core::TrackId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Identity of one resource binding
///
/// Minted fresh on every bind, monotonically increasing within a
/// controller. An event tagged with a superseded id is discarded on
/// arrival, however late it shows up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BindingId(u64);

impl BindingId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Events emitted by the audio resource
///
/// The controller never assumes these arrive synchronously or in order
/// relative to its own commands; each is applied only if its binding is
/// still the live one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ResourceEvent {
    /// The load finished and the resource knows its duration
    MetadataReady {
        /// Total track duration as reported by the resource
        duration: Duration,
    },

    /// Periodic playback position report
    PositionUpdate {
        /// Elapsed time from the start of the track
        position: Duration,
    },

    /// The track ran to completion
    Ended,

    /// The load or playback failed
    Error {
        /// Resource-supplied description
        message: String,
    },
}

/// Events emitted by the transport controller for UI synchronization
///
/// Accumulated in a pending queue and drained by the host after each
/// dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Resource lifecycle state changed
    StateChanged {
        /// The new state
        state: ResourceState,
    },

    /// A different track was bound
    TrackChanged {
        /// Id of the newly bound track
        track_id: TrackId,
        /// Id of the previously bound track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// Playback position moved
    PositionChanged {
        /// Position as a ratio of duration (0.0-1.0)
        ratio: f64,
        /// Elapsed seconds
        elapsed_seconds: f64,
    },

    /// The current track played to its end
    TrackFinished {
        /// Id of the finished track
        track_id: TrackId,
    },

    /// Volume level or mute state changed
    VolumeChanged {
        /// New level (0.0-1.0)
        level: f32,
        /// New mute state
        muted: bool,
    },

    /// A bind failed terminally; no automatic retry follows
    LoadFailed {
        /// Id of the track whose bind failed
        track_id: TrackId,
        /// Resource-supplied description
        message: String,
    },
}
