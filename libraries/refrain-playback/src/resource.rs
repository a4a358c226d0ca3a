//! Audio resource seam
//!
//! Abstracts the underlying decode/output primitive so the transport works
//! against desktop, mobile, and test backends alike. Loading is
//! asynchronous: `begin_load` only initiates the work, and the host later
//! feeds the resulting `ResourceEvent`s back into the controller tagged
//! with the binding captured at bind time.

use crate::error::Result;
use std::time::Duration;
use url::Url;

/// An opaque audio decode/output primitive
///
/// Deliberately not `Send`: the controller is a single-threaded `&mut self`
/// state machine, the resource handle lives on the host's UI thread next to
/// it, and the host pump loop is the only place commands are issued from.
///
/// Command methods return `Err` when the underlying primitive rejects the
/// operation. The controller logs and absorbs most of these instead of
/// propagating, so a flaky resource degrades to a warning rather than
/// poisoning the session.
pub trait AudioResource {
    /// Start loading the given source, superseding any previous load
    ///
    /// Completion is reported asynchronously via
    /// `ResourceEvent::MetadataReady` (or `ResourceEvent::Error`); an `Err`
    /// here means the load could not even be initiated.
    fn begin_load(&mut self, source: &Url) -> Result<()>;

    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the position
    fn pause(&mut self) -> Result<()>;

    /// Jump to an absolute position from the start of the track
    fn seek_to(&mut self, position: Duration) -> Result<()>;

    /// Apply a volume level in 0.0-1.0
    fn set_volume(&mut self, level: f32) -> Result<()>;

    /// Mute or unmute without touching the volume level
    fn set_muted(&mut self, muted: bool) -> Result<()>;
}

/// Silent audio resource for testing
///
/// Accepts every command and produces no sound
#[cfg(test)]
pub struct SilentResource;

#[cfg(test)]
impl AudioResource for SilentResource {
    fn begin_load(&mut self, _source: &Url) -> Result<()> {
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        Ok(())
    }

    fn seek_to(&mut self, _position: Duration) -> Result<()> {
        Ok(())
    }

    fn set_volume(&mut self, _level: f32) -> Result<()> {
        Ok(())
    }

    fn set_muted(&mut self, _muted: bool) -> Result<()> {
        Ok(())
    }
}
