//! Refrain - Playback Transport
//!
//! Host-agnostic playback transport for the Refrain streaming client.
//!
//! This crate provides:
//! - Transport controller (bind/play/pause/seek/volume/advance state machine)
//! - Stale-binding protection for out-of-order resource events
//! - Track sequence with boundary-aware next/previous
//! - Volume control with orthogonal mute (0.0-1.0)
//! - Input dispatcher (buttons, scrub bars, keyboard, swipe gestures)
//! - Session events and a serializable UI snapshot
//!
//! # Architecture
//!
//! `refrain-playback` never talks to an audio device or the network itself:
//! - Audio decode/output is behind the [`AudioResource`] trait
//! - Source URLs come from `refrain-core`'s locator
//! - Haptics are behind the [`HapticFeedback`] trait
//!
//! The controller is a single-threaded `&mut self` state machine. The host
//! owns the pump loop: it dispatches intents and resource events one at a
//! time, then reads [`TransportController::snapshot`] and
//! [`TransportController::drain_events`] to refresh the UI. Resource events
//! are tagged with the [`BindingId`] captured at bind time; events from a
//! superseded binding are discarded no matter how late they arrive.
//!
//! # Example: Binding and Playback
//!
//! ```rust
//! use refrain_core::{ListenerIdentity, SourceResolver, Track, TrackId};
//! use refrain_playback::{
//!     AudioResource, ResourceEvent, ResourceState, Result, TransportConfig,
//!     TransportController, TransportMessage,
//! };
//! use std::time::Duration;
//! use url::Url;
//!
//! // Host-provided playback backend
//! struct WebAudioHandle;
//!
//! impl AudioResource for WebAudioHandle {
//!     fn begin_load(&mut self, _source: &Url) -> Result<()> {
//!         Ok(())
//!     }
//!     fn play(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn pause(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn seek_to(&mut self, _position: Duration) -> Result<()> {
//!         Ok(())
//!     }
//!     fn set_volume(&mut self, _level: f32) -> Result<()> {
//!         Ok(())
//!     }
//!     fn set_muted(&mut self, _muted: bool) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let resolver = SourceResolver::new("https://music.example.com").unwrap();
//! let listener = ListenerIdentity::new("Ada", "ada@example.com");
//! let mut transport = TransportController::new(
//!     Box::new(WebAudioHandle),
//!     resolver,
//!     listener,
//!     TransportConfig::default(),
//! );
//!
//! // The track-list screen supplies the sequence and the selection
//! let tracks = vec![
//!     Track::new("t1", "Night Drive", "The Reverbs", "/audio/t1.mp3"),
//!     Track::new("t2", "Analog Dawn", "The Reverbs", "/audio/t2.mp3"),
//! ];
//! transport.sync_sequence(tracks, &TrackId::new("t1"));
//!
//! // The resource reports readiness; autoplay takes it from there
//! let binding = transport.current_binding().unwrap();
//! transport.dispatch(TransportMessage::Resource {
//!     binding,
//!     event: ResourceEvent::MetadataReady {
//!         duration: Duration::from_secs(214),
//!     },
//! });
//!
//! let snapshot = transport.snapshot();
//! assert_eq!(snapshot.state, ResourceState::Playing);
//! assert_eq!(snapshot.duration_seconds, Some(214.0));
//! assert!(snapshot.has_next);
//! ```
//!
//! # Example: Normalizing Input
//!
//! ```rust
//! use refrain_playback::{InputConfig, InputDispatcher, SwipeGesture, TransportIntent};
//!
//! let dispatcher = InputDispatcher::new(InputConfig::default());
//!
//! // A quick leftward flick skips forward
//! let intent = dispatcher.swipe(SwipeGesture {
//!     delta_x: -320.0,
//!     delta_y: 12.0,
//!     elapsed_ms: 180.0,
//! });
//! assert_eq!(intent, Some(TransportIntent::Next));
//!
//! // Shortcuts never fire while the listener is typing
//! assert_eq!(dispatcher.key_press(" ", true), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod events;
mod haptics;
mod input;
mod resource;
mod sequence;
mod transport;
pub mod types;
mod volume;

// Public exports
pub use error::{Result, TransportError};
pub use events::{BindingId, ResourceEvent, SessionEvent};
pub use haptics::{HapticFeedback, NoopHaptics};
pub use input::{InputConfig, InputDispatcher, SwipeGesture, TransportButton};
pub use resource::AudioResource;
pub use sequence::TrackSequence;
pub use transport::{TransportController, TransportIntent, TransportMessage};
pub use types::{ResourceState, SessionSnapshot, TransportConfig};
