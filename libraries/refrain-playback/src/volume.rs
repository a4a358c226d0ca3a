//! Volume and mute state shared across bindings
//!
//! Volume is the one piece of session state that survives track changes;
//! everything else resets per binding. Mute is independent of the level so
//! un-muting restores the loudness the listener had before.

/// Volume level and mute flag
///
/// The level is a ratio in 0.0-1.0 applied directly to the resource.
/// Setting a level above zero while muted clears the mute: dragging the
/// volume bar up is an implicit un-mute on every control surface.
#[derive(Debug, Clone)]
pub struct VolumeControl {
    /// Volume level (0.0-1.0)
    level: f32,

    /// Mute state (preserves the level)
    muted: bool,
}

impl VolumeControl {
    /// Create a volume control at the given level, unmuted
    pub fn new(level: f32) -> Self {
        Self {
            level: clamp_level(level),
            muted: false,
        }
    }

    /// Set the volume level, clamped to 0.0-1.0
    ///
    /// A non-finite level is ignored. A level above zero clears the mute;
    /// setting zero leaves the mute flag as it was.
    pub fn set(&mut self, level: f32) {
        if !level.is_finite() {
            return;
        }
        self.level = clamp_level(level);
        if self.level > 0.0 {
            self.muted = false;
        }
    }

    /// Adjust the level by a signed delta, clamped to 0.0-1.0
    pub fn nudge(&mut self, delta: f32) {
        self.set(self.level + delta);
    }

    /// Toggle mute, leaving the level untouched
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Current level (0.0-1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl Default for VolumeControl {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Clamp a level into 0.0-1.0; non-finite input falls back to full volume
fn clamp_level(level: f32) -> f32 {
    if level.is_finite() {
        level.clamp(0.0, 1.0)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_volume() {
        let vol = VolumeControl::new(0.8);
        assert_eq!(vol.level(), 0.8);
        assert!(!vol.is_muted());
    }

    #[test]
    fn set_clamps_to_unit_range() {
        let mut vol = VolumeControl::new(0.5);

        vol.set(1.7);
        assert_eq!(vol.level(), 1.0);

        vol.set(-0.3);
        assert_eq!(vol.level(), 0.0);
    }

    #[test]
    fn set_ignores_non_finite_levels() {
        let mut vol = VolumeControl::new(0.5);

        vol.set(f32::NAN);
        assert_eq!(vol.level(), 0.5);

        vol.set(f32::INFINITY);
        assert_eq!(vol.level(), 0.5);
    }

    #[test]
    fn positive_level_clears_mute() {
        let mut vol = VolumeControl::new(0.8);
        vol.toggle_mute();
        assert!(vol.is_muted());

        vol.set(0.3);
        assert!(!vol.is_muted());
        assert_eq!(vol.level(), 0.3);
    }

    #[test]
    fn zero_level_keeps_mute() {
        let mut vol = VolumeControl::new(0.8);
        vol.toggle_mute();

        vol.set(0.0);
        assert!(vol.is_muted());
        assert_eq!(vol.level(), 0.0);
    }

    #[test]
    fn toggle_mute_preserves_level() {
        let mut vol = VolumeControl::new(0.6);

        vol.toggle_mute();
        assert!(vol.is_muted());
        assert_eq!(vol.level(), 0.6); // Level preserved

        vol.toggle_mute();
        assert!(!vol.is_muted());
        assert_eq!(vol.level(), 0.6);
    }

    #[test]
    fn nudge_saturates_at_bounds() {
        let mut vol = VolumeControl::new(0.95);

        vol.nudge(0.1);
        assert_eq!(vol.level(), 1.0);

        vol.nudge(-0.1);
        assert!((vol.level() - 0.9).abs() < 1e-6);

        let mut vol = VolumeControl::new(0.05);
        vol.nudge(-0.1);
        assert_eq!(vol.level(), 0.0);
    }

    #[test]
    fn nudge_up_while_muted_unmutes() {
        let mut vol = VolumeControl::new(0.4);
        vol.toggle_mute();

        vol.nudge(0.1);
        assert!(!vol.is_muted());
        assert!((vol.level() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn default_is_full_volume() {
        let vol = VolumeControl::default();
        assert_eq!(vol.level(), 1.0);
        assert!(!vol.is_muted());
    }

    #[test]
    fn non_finite_initial_level_falls_back_to_full() {
        let vol = VolumeControl::new(f32::NAN);
        assert_eq!(vol.level(), 1.0);
    }
}
