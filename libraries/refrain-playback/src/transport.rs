//! Transport controller - the playback session state machine
//!
//! Owns one audio resource binding at a time and drives it through
//! load/play/pause/seek/volume/advance transitions while keeping the
//! UI-facing read model consistent with what the resource is actually
//! doing. User intents and resource callbacks are both dispatched as
//! messages, one at a time, so the stale-binding discard rule is a single
//! mechanical check at the top of the resource path.

use crate::{
    error::Result,
    events::{BindingId, ResourceEvent, SessionEvent},
    resource::AudioResource,
    sequence::TrackSequence,
    types::{ResourceState, SessionSnapshot, TransportConfig},
    volume::VolumeControl,
};
use refrain_core::{ListenerIdentity, SourceResolver, Track, TrackId};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Normalized user or system request consumed by the controller
///
/// Every input channel reduces to this vocabulary; see `InputDispatcher`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransportIntent {
    /// Toggle between Playing and Paused; replays after Ended
    TogglePlay,

    /// Jump to a relative position in the current track
    Seek {
        /// Target position as a ratio of duration, clamped to 0.0-1.0
        ratio: f64,
    },

    /// Set the volume level
    SetVolume {
        /// Target level, clamped to 0.0-1.0
        level: f32,
    },

    /// Nudge the volume relative to its current level
    AdjustVolume {
        /// Signed level change
        delta: f32,
    },

    /// Flip the mute flag, preserving the volume level
    ToggleMute,

    /// Advance to the next track (no-op at the end of the sequence)
    Next,

    /// Go back to the previous track (no-op at the start of the sequence)
    Previous,
}

/// Inbound message processed by the controller one at a time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TransportMessage {
    /// A normalized user intent
    Intent(TransportIntent),

    /// An asynchronous resource event, tagged with its binding
    Resource {
        /// Binding the event belongs to
        binding: BindingId,
        /// The event itself
        event: ResourceEvent,
    },
}

/// One live association between the session and a resource load
#[derive(Debug, Clone)]
struct Binding {
    id: BindingId,
    track_id: TrackId,
}

/// Playback session state machine
///
/// Single-threaded by design: the host owns the pump loop, calls
/// [`dispatch`](TransportController::dispatch) for every intent and resource
/// event, then reads [`snapshot`](TransportController::snapshot) and
/// [`drain_events`](TransportController::drain_events) to refresh the UI.
/// Exactly one binding is live at a time. A new bind supersedes the old one
/// before any resource command is issued, and events tagged with a
/// superseded binding are discarded on arrival.
///
/// State machine: `Idle -> Binding -> Ready -> Playing <-> Paused -> Ended`,
/// with `Binding -> Failed` on load error and `Ended -> Binding` when the
/// sequence auto-advances. Volume and mute are the only state shared across
/// bindings; position and duration reset on every bind.
pub struct TransportController {
    // Collaborators
    resource: Box<dyn AudioResource>,
    resolver: SourceResolver,
    listener: ListenerIdentity,
    config: TransportConfig,

    // Session state
    sequence: TrackSequence,
    state: ResourceState,
    binding: Option<Binding>,
    next_binding: u64,

    // Per-binding derived state
    position: Duration,
    duration: Option<Duration>,

    // Shared across bindings
    volume: VolumeControl,

    // Event queue for UI synchronization
    pending_events: Vec<SessionEvent>,
}

impl TransportController {
    /// Create a controller in the Idle state with an empty sequence
    pub fn new(
        resource: Box<dyn AudioResource>,
        resolver: SourceResolver,
        listener: ListenerIdentity,
        config: TransportConfig,
    ) -> Self {
        let volume = VolumeControl::new(config.initial_volume);
        Self {
            resource,
            resolver,
            listener,
            config,
            sequence: TrackSequence::new(),
            state: ResourceState::Idle,
            binding: None,
            next_binding: 0,
            position: Duration::ZERO,
            duration: None,
            volume,
            pending_events: Vec::new(),
        }
    }

    // ===== Sequence Input =====

    /// Replace the track sequence and the externally-selected current track
    ///
    /// Reacts to identity changes only: a new list with the same current id
    /// keeps the live binding (list contents may change freely around it).
    /// A changed id starts a fresh bind. An id that no longer occurs in the
    /// list tears the session down to Idle.
    pub fn sync_sequence(&mut self, tracks: Vec<Track>, current_id: &TrackId) {
        let bound_id = self.binding.as_ref().map(|b| b.track_id.clone());
        self.sequence = TrackSequence::with_selection(tracks, current_id);

        if self.sequence.current_index().is_none() {
            debug!("Selected track {} not in sequence, detaching", current_id);
            self.detach();
            return;
        }

        if bound_id.as_ref() == Some(current_id) {
            // Same identity, the live binding stands
            return;
        }

        self.bind_current();
    }

    /// Tear the session down to Idle
    ///
    /// Pauses output, supersedes the live binding without waiting for any
    /// in-flight resource operation, and clears per-binding state. Volume
    /// survives for the next bind. Called when the hosting UI unmounts or
    /// its track inputs disappear.
    pub fn detach(&mut self) {
        if let Err(e) = self.resource.pause() {
            warn!("Pause during detach failed: {}", e);
        }
        self.binding = None;
        self.position = Duration::ZERO;
        self.duration = None;
        self.sequence.clear_selection();
        self.set_state(ResourceState::Idle);
    }

    // ===== Message Dispatch =====

    /// Process one inbound message
    pub fn dispatch(&mut self, message: TransportMessage) {
        match message {
            TransportMessage::Intent(intent) => self.apply_intent(intent),
            TransportMessage::Resource { binding, event } => {
                self.handle_resource_event(binding, event);
            }
        }
    }

    /// Apply one normalized intent
    pub fn apply_intent(&mut self, intent: TransportIntent) {
        match intent {
            TransportIntent::TogglePlay => self.toggle_play(),
            TransportIntent::Seek { ratio } => self.seek_to_ratio(ratio),
            TransportIntent::SetVolume { level } => self.set_volume(level),
            TransportIntent::AdjustVolume { delta } => self.adjust_volume(delta),
            TransportIntent::ToggleMute => self.toggle_mute(),
            TransportIntent::Next => self.next(),
            TransportIntent::Previous => self.previous(),
        }
    }

    /// Apply one resource event, discarding it if its binding is stale
    ///
    /// Failed is terminal for a binding: whatever the resource reports
    /// afterwards is dropped until a new bind supersedes it.
    pub fn handle_resource_event(&mut self, binding: BindingId, event: ResourceEvent) {
        if self.binding.as_ref().map(|b| b.id) != Some(binding) {
            debug!("Discarding {:?} from superseded binding {}", event, binding);
            return;
        }
        if self.state == ResourceState::Failed {
            debug!("Discarding {:?} from failed binding {}", event, binding);
            return;
        }

        match event {
            ResourceEvent::MetadataReady { duration } => self.on_metadata_ready(duration),
            ResourceEvent::PositionUpdate { position } => self.on_position_update(position),
            ResourceEvent::Ended => self.on_ended(),
            ResourceEvent::Error { message } => self.fail_binding(&message),
        }
    }

    // ===== Intents =====

    /// Toggle between playing and paused
    ///
    /// In Ended this replays the current track from the start. In Idle,
    /// Binding, and Failed there is nothing to toggle and the intent is
    /// dropped.
    pub fn toggle_play(&mut self) {
        match self.state {
            ResourceState::Playing => self.apply_pause(),
            ResourceState::Ready | ResourceState::Paused => self.apply_play(),
            ResourceState::Ended => self.replay(),
            ResourceState::Idle | ResourceState::Binding | ResourceState::Failed => {
                debug!("TogglePlay ignored in {:?}", self.state);
            }
        }
    }

    /// Seek to a relative position in the current track
    ///
    /// The ratio is clamped to 0.0-1.0 (NaN counts as 0). Accepted in
    /// Ready, Playing, and Paused without changing which of them the
    /// session is in; dropped in every other state. With the duration still
    /// unknown the target collapses to the start of the track.
    pub fn seek_to_ratio(&mut self, ratio: f64) {
        if !self.state.can_seek() {
            debug!("Seek ignored in {:?}", self.state);
            return;
        }

        let ratio = clamp_ratio(ratio);
        let target = self
            .duration
            .map(|d| d.mul_f64(ratio))
            .unwrap_or(Duration::ZERO);

        match self.resource.seek_to(target) {
            Ok(()) => {
                // Optimistic: reflect the target now instead of waiting for
                // the next position report
                self.position = target;
                self.emit_position_changed();
            }
            Err(e) => warn!("Seek to {:?} failed: {}", target, e),
        }
    }

    /// Set the volume level, clamped to 0.0-1.0
    ///
    /// A level above zero clears the mute. Valid in every state; volume is
    /// shared across bindings.
    pub fn set_volume(&mut self, level: f32) {
        let before = (self.volume.level(), self.volume.is_muted());
        self.volume.set(level);
        self.after_volume_change(before);
    }

    /// Nudge the volume by a signed delta, clamped to 0.0-1.0
    pub fn adjust_volume(&mut self, delta: f32) {
        let before = (self.volume.level(), self.volume.is_muted());
        self.volume.nudge(delta);
        self.after_volume_change(before);
    }

    /// Flip the mute flag, preserving the volume level
    pub fn toggle_mute(&mut self) {
        let before = (self.volume.level(), self.volume.is_muted());
        self.volume.toggle_mute();
        self.after_volume_change(before);
    }

    /// Skip to the next track; no-op at the end of the sequence
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if self.sequence.advance() {
            self.bind_current();
        } else {
            debug!("Next ignored at sequence boundary");
        }
    }

    /// Skip to the previous track; no-op at the start of the sequence
    pub fn previous(&mut self) {
        if self.sequence.retreat() {
            self.bind_current();
        } else {
            debug!("Previous ignored at sequence boundary");
        }
    }

    // ===== Resource Events =====

    /// Metadata arrived for the live binding
    ///
    /// The resource-reported duration is authoritative; a zero duration is
    /// recorded as unknown so ratio math never divides by it. Reaching
    /// Ready triggers play when autoplay is on.
    fn on_metadata_ready(&mut self, duration: Duration) {
        self.duration = (!duration.is_zero()).then_some(duration);

        if self.state == ResourceState::Binding {
            self.set_state(ResourceState::Ready);
            if self.config.autoplay_on_ready {
                self.apply_play();
            }
        }
    }

    /// Position report from the live binding
    fn on_position_update(&mut self, position: Duration) {
        if !self.state.is_bound() {
            return;
        }
        self.position = position;
        self.emit_position_changed();
    }

    /// The live binding ran to the end of its track
    ///
    /// Auto-advances when a next track exists; otherwise the session stays
    /// in Ended and TogglePlay replays.
    fn on_ended(&mut self) {
        if !matches!(
            self.state,
            ResourceState::Ready | ResourceState::Playing | ResourceState::Paused
        ) {
            return;
        }

        self.set_state(ResourceState::Ended);
        if let Some(track_id) = self.binding.as_ref().map(|b| b.track_id.clone()) {
            self.emit(SessionEvent::TrackFinished { track_id });
        }

        if self.sequence.has_next() {
            self.sequence.advance();
            self.bind_current();
        }
    }

    /// Terminal failure of the live binding
    ///
    /// No automatic retry; recovery requires a new bind (skip, or a changed
    /// selection from the host).
    fn fail_binding(&mut self, message: &str) {
        warn!("Resource failure: {}", message);
        self.set_state(ResourceState::Failed);
        if let Some(track_id) = self.binding.as_ref().map(|b| b.track_id.clone()) {
            self.emit(SessionEvent::LoadFailed {
                track_id,
                message: message.to_string(),
            });
        }
    }

    // ===== Binding =====

    /// Bind the resource to the sequence's current track
    ///
    /// Supersedes the previous binding unconditionally: the fresh BindingId
    /// is live before any resource command goes out, so events from the old
    /// load are already stale when they arrive. Per-binding state resets
    /// here; volume and mute are re-applied from the shared control.
    fn bind_current(&mut self) {
        let Some(track) = self.sequence.current_track().cloned() else {
            debug!("Bind requested with no current track");
            return;
        };

        let previous_track_id = self.binding.as_ref().map(|b| b.track_id.clone());
        let id = self.mint_binding_id();
        debug!("Binding {} to track {}", id, track.id);

        self.binding = Some(Binding {
            id,
            track_id: track.id.clone(),
        });
        self.position = Duration::ZERO;
        self.duration = None;
        self.set_state(ResourceState::Binding);
        self.emit(SessionEvent::TrackChanged {
            track_id: track.id.clone(),
            previous_track_id,
        });

        let source = match self.resolve_source(&track.id) {
            Ok(url) => url,
            Err(e) => {
                self.fail_binding(&e.to_string());
                return;
            }
        };

        // The fresh load starts from whatever the listener last chose
        self.apply_volume_to_resource();

        if let Err(e) = self.resource.begin_load(&source) {
            self.fail_binding(&e.to_string());
        }
    }

    /// Mint the next binding id
    fn mint_binding_id(&mut self) -> BindingId {
        self.next_binding += 1;
        BindingId::new(self.next_binding)
    }

    /// Resolve the streamable source for a track, scoped to this listener
    fn resolve_source(&self, track_id: &TrackId) -> Result<Url> {
        Ok(self.resolver.stream_url(&self.listener, track_id)?)
    }

    // ===== Resource Commands =====

    /// Issue play and reflect success in state
    fn apply_play(&mut self) {
        match self.resource.play() {
            Ok(()) => self.set_state(ResourceState::Playing),
            Err(e) => warn!("Play failed: {}", e),
        }
    }

    /// Issue pause and reflect success in state
    fn apply_pause(&mut self) {
        match self.resource.pause() {
            Ok(()) => self.set_state(ResourceState::Paused),
            Err(e) => warn!("Pause failed: {}", e),
        }
    }

    /// Restart the ended track from the beginning
    fn replay(&mut self) {
        match self.resource.seek_to(Duration::ZERO) {
            Ok(()) => {
                self.position = Duration::ZERO;
                self.emit_position_changed();
                self.apply_play();
            }
            Err(e) => warn!("Replay seek failed: {}", e),
        }
    }

    /// Push the shared volume and mute values down to the resource
    fn apply_volume_to_resource(&mut self) {
        if let Err(e) = self.resource.set_volume(self.volume.level()) {
            warn!("Applying volume failed: {}", e);
        }
        if let Err(e) = self.resource.set_muted(self.volume.is_muted()) {
            warn!("Applying mute failed: {}", e);
        }
    }

    /// Volume mutation epilogue: sync the resource and notify the UI
    ///
    /// Skipped entirely when the mutation turned out to be a no-op (clamped
    /// away, or ignored as non-finite).
    fn after_volume_change(&mut self, before: (f32, bool)) {
        if (self.volume.level(), self.volume.is_muted()) == before {
            return;
        }

        self.apply_volume_to_resource();
        self.emit(SessionEvent::VolumeChanged {
            level: self.volume.level(),
            muted: self.volume.is_muted(),
        });
    }

    // ===== State & Events =====

    /// Record a state transition and notify the UI if it actually moved
    fn set_state(&mut self, state: ResourceState) {
        if self.state == state {
            return;
        }
        debug!("State {:?} -> {:?}", self.state, state);
        self.state = state;
        self.emit(SessionEvent::StateChanged { state });
    }

    fn emit(&mut self, event: SessionEvent) {
        self.pending_events.push(event);
    }

    fn emit_position_changed(&mut self) {
        let ratio = self.position_ratio();
        let elapsed_seconds = self.position.as_secs_f64();
        self.emit(SessionEvent::PositionChanged {
            ratio,
            elapsed_seconds,
        });
    }

    /// Drain accumulated session events for the host UI
    ///
    /// Events come out in emission order; the queue is empty afterwards.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check whether undrained events are pending
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== State Queries =====

    /// Current lifecycle state
    pub fn state(&self) -> ResourceState {
        self.state
    }

    /// Identity of the live binding, if any
    ///
    /// The host captures this when wiring resource callbacks so later
    /// events carry the binding they belong to.
    pub fn current_binding(&self) -> Option<BindingId> {
        self.binding.as_ref().map(|b| b.id)
    }

    /// The track sequence as last synced
    pub fn sequence(&self) -> &TrackSequence {
        &self.sequence
    }

    /// Playback position as a ratio of duration, always finite in 0.0-1.0
    ///
    /// An unknown or zero duration divides against 1 instead, so a track
    /// with no metadata yet reports 0 rather than NaN.
    pub fn position_ratio(&self) -> f64 {
        let elapsed = self.position.as_secs_f64();
        let denom = match self.duration {
            Some(d) if d.as_secs_f64() > 0.0 => d.as_secs_f64(),
            _ => 1.0,
        };
        (elapsed / denom).clamp(0.0, 1.0)
    }

    /// Value snapshot of the whole session for rendering
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            track_id: self.binding.as_ref().map(|b| b.track_id.clone()),
            state: self.state,
            position_ratio: self.position_ratio(),
            duration_seconds: self.duration.map(|d| d.as_secs_f64()),
            elapsed_seconds: self.position.as_secs_f64(),
            volume: self.volume.level(),
            muted: self.volume.is_muted(),
            loading: self.state == ResourceState::Binding,
            has_next: self.sequence.has_next(),
            has_previous: self.sequence.has_previous(),
        }
    }
}

/// Clamp a requested seek ratio into 0.0-1.0, treating NaN as 0
fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}
