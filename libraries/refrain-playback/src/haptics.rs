//! Haptic feedback seam for gesture recognition

use std::time::Duration;

/// Fire-and-forget haptic pulses for recognized gestures
///
/// Feedback is decoupled from the playback effect: a pulse that goes
/// nowhere (no vibration hardware, permission denied) must not change
/// transport behavior, so the method is infallible and best-effort.
pub trait HapticFeedback {
    /// Emit one short vibration pulse
    fn pulse(&self, duration: Duration);
}

/// Haptics for hosts without a vibration surface; does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl HapticFeedback for NoopHaptics {
    fn pulse(&self, _duration: Duration) {}
}
