//! Refrain Core
//!
//! Domain types and stream source resolution for the Refrain audio client.
//!
//! This crate provides the foundational building blocks shared by the
//! playback core and the UI shells:
//! - **Domain Types**: `Track`, `TrackId`, `ListenerIdentity`
//! - **Source Resolution**: `SourceResolver` for API-rooted stream and cover URLs
//! - **Display Helpers**: clock-style time formatting
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use refrain_core::{ListenerIdentity, SourceResolver, Track};
//!
//! let resolver = SourceResolver::new("http://localhost:8080")?;
//! let listener = ListenerIdentity::new("Alice", "alice@example.com");
//!
//! let track = Track::new("9b1f", "Night Drive", "The Reverbs", "/audio/9b1f.mp3");
//! let stream = resolver.stream_url(&listener, &track.id)?;
//!
//! assert_eq!(stream.path(), "/api/tracks/audio");
//! # Ok::<(), refrain_core::CoreError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod clock;
pub mod error;
pub mod locator;
pub mod types;

// Re-export commonly used types
pub use clock::format_clock;
pub use error::{CoreError, Result};
pub use locator::SourceResolver;
pub use types::{ListenerIdentity, Track, TrackId};
