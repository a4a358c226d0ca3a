//! Input normalization
//!
//! Four input channels feed one intent vocabulary: transport buttons,
//! pointer interaction on the progress and volume bars, keyboard shortcuts,
//! and directional swipe gestures. The dispatcher turns each raw event into
//! at most one `TransportIntent`; a disabled channel yields none. No channel
//! reaches into resource internals directly.

use crate::haptics::{HapticFeedback, NoopHaptics};
use crate::transport::TransportIntent;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Haptic pulse length for a recognized swipe
const GESTURE_PULSE: Duration = Duration::from_millis(15);

/// Capability set and tuning for the input dispatcher
///
/// Player surfaces differ in what they offer (the embedded surface has no
/// volume bar, touch surfaces add gestures); one dispatcher covers them all
/// under this configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Keyboard shortcuts enabled (default: true)
    pub keyboard: bool,

    /// Swipe gesture recognition enabled (default: true)
    pub gestures: bool,

    /// Pointer volume bar enabled (default: true)
    pub volume_bar: bool,

    /// Minimum swipe speed in pixels per millisecond (default: 0.5)
    pub swipe_velocity_threshold: f64,

    /// Volume change per vertical swipe (default: 0.1)
    pub volume_step: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            keyboard: true,
            gestures: true,
            volume_bar: true,
            swipe_velocity_threshold: 0.5,
            volume_step: 0.1,
        }
    }
}

/// Discrete transport buttons on the player surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportButton {
    /// Combined play/pause button
    TogglePlay,

    /// Skip forward
    Next,

    /// Skip backward
    Previous,

    /// Mute/unmute
    ToggleMute,
}

/// A completed swipe in screen coordinates
///
/// Deltas are release point minus touch point; y grows downward as on
/// every screen surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    /// Horizontal travel in pixels (positive = rightward)
    pub delta_x: f64,

    /// Vertical travel in pixels (positive = downward)
    pub delta_y: f64,

    /// Time from touch start to release in milliseconds
    pub elapsed_ms: f64,
}

/// Normalizes raw input events into transport intents
///
/// Stateless apart from its configuration and the injected haptic surface;
/// the controller is the single owner of session state.
pub struct InputDispatcher {
    config: InputConfig,
    haptics: Box<dyn HapticFeedback>,
}

impl InputDispatcher {
    /// Create a dispatcher with no haptic surface
    pub fn new(config: InputConfig) -> Self {
        Self::with_haptics(config, Box::new(NoopHaptics))
    }

    /// Create a dispatcher that pulses the given haptic surface on gestures
    pub fn with_haptics(config: InputConfig, haptics: Box<dyn HapticFeedback>) -> Self {
        Self { config, haptics }
    }

    /// Current configuration
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// A transport button press
    ///
    /// Buttons map 1:1 onto intents. Boundary conditions (Next on the last
    /// track) are the controller's to ignore; the snapshot's
    /// `has_next`/`has_previous` flags drive the UI affordance.
    pub fn press(&self, button: TransportButton) -> TransportIntent {
        match button {
            TransportButton::TogglePlay => TransportIntent::TogglePlay,
            TransportButton::Next => TransportIntent::Next,
            TransportButton::Previous => TransportIntent::Previous,
            TransportButton::ToggleMute => TransportIntent::ToggleMute,
        }
    }

    /// A pointer interaction on the progress bar
    ///
    /// `offset` is the pointer x relative to the element's left edge,
    /// `width` the element's rendered width. Degenerate geometry (zero,
    /// negative, or non-finite width) produces no intent.
    pub fn progress_click(&self, offset: f64, width: f64) -> Option<TransportIntent> {
        bar_ratio(offset, width).map(|ratio| TransportIntent::Seek { ratio })
    }

    /// A pointer interaction on the volume bar
    ///
    /// Same geometry rules as the progress bar; the resulting ratio becomes
    /// the new volume level.
    pub fn volume_click(&self, offset: f64, width: f64) -> Option<TransportIntent> {
        if !self.config.volume_bar {
            return None;
        }
        bar_ratio(offset, width).map(|ratio| TransportIntent::SetVolume {
            level: ratio as f32,
        })
    }

    /// A key press, with whether focus currently sits in a text-entry field
    ///
    /// Space toggles play, the arrow keys skip, "m" (either case) toggles
    /// mute. Shortcuts never fire while the listener is typing.
    pub fn key_press(&self, key: &str, in_text_entry: bool) -> Option<TransportIntent> {
        if !self.config.keyboard || in_text_entry {
            return None;
        }

        match key {
            " " => Some(TransportIntent::TogglePlay),
            "ArrowRight" => Some(TransportIntent::Next),
            "ArrowLeft" => Some(TransportIntent::Previous),
            k if k.eq_ignore_ascii_case("m") => Some(TransportIntent::ToggleMute),
            _ => None,
        }
    }

    /// A completed swipe gesture
    ///
    /// The axis with the higher speed wins. Horizontal swipes skip tracks
    /// (leftward = next, as when paging a carousel); vertical swipes nudge
    /// the volume (upward = louder). Speeds at or below the threshold are
    /// treated as drags, not swipes. Recognition pulses the haptic surface
    /// before the intent is returned.
    pub fn swipe(&self, gesture: SwipeGesture) -> Option<TransportIntent> {
        if !self.config.gestures {
            return None;
        }
        if !gesture.elapsed_ms.is_finite() || gesture.elapsed_ms <= 0.0 {
            return None;
        }
        if !gesture.delta_x.is_finite() || !gesture.delta_y.is_finite() {
            return None;
        }

        let vx = gesture.delta_x / gesture.elapsed_ms;
        let vy = gesture.delta_y / gesture.elapsed_ms;
        let threshold = self.config.swipe_velocity_threshold;

        let intent = if vx.abs() >= vy.abs() {
            if vx.abs() <= threshold {
                return None;
            }
            if vx < 0.0 {
                TransportIntent::Next
            } else {
                TransportIntent::Previous
            }
        } else {
            if vy.abs() <= threshold {
                return None;
            }
            if vy < 0.0 {
                TransportIntent::AdjustVolume {
                    delta: self.config.volume_step,
                }
            } else {
                TransportIntent::AdjustVolume {
                    delta: -self.config.volume_step,
                }
            }
        };

        self.haptics.pulse(GESTURE_PULSE);
        Some(intent)
    }
}

/// Ratio of a pointer offset over an element width, clamped to 0.0-1.0
fn bar_ratio(offset: f64, width: f64) -> Option<f64> {
    if !offset.is_finite() || !width.is_finite() || width <= 0.0 {
        return None;
    }
    Some((offset / width).clamp(0.0, 1.0))
}
