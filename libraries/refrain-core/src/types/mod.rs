//! Domain types for Refrain

mod ids;
mod listener;
mod track;

pub use ids::TrackId;
pub use listener::ListenerIdentity;
pub use track::Track;
