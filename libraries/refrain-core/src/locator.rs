//! Stream source resolution
//!
//! Turns a track identity plus a listener identity into the URLs the
//! streaming API serves audio and artwork from:
//! - audio:   `{base}/api/tracks/audio?email={email}&trackId={id}`
//! - artwork: `{base}/api/tracks/{id}/cover`

use crate::error::{CoreError, Result};
use crate::types::{ListenerIdentity, Track, TrackId};
use url::Url;

/// Resolves API-rooted source locators for tracks
///
/// Holds the validated API base; all produced URLs are absolute. Track ids
/// and listener emails are percent-encoded on the way in, so opaque ids
/// from the catalog cannot corrupt the path or query.
#[derive(Debug, Clone)]
pub struct SourceResolver {
    api_base: Url,
}

impl SourceResolver {
    /// Create a resolver from the API base URL
    ///
    /// The base must be an absolute http(s) URL. A path prefix is allowed
    /// (`https://host/music`); endpoints are appended below it.
    pub fn new(api_base: &str) -> Result<Self> {
        let api_base = Url::parse(api_base)
            .map_err(|e| CoreError::invalid_api_base(api_base, e.to_string()))?;

        if api_base.cannot_be_a_base() {
            return Err(CoreError::invalid_api_base(
                api_base.as_str(),
                "cannot be a base",
            ));
        }
        if api_base.scheme() != "http" && api_base.scheme() != "https" {
            return Err(CoreError::invalid_api_base(
                api_base.as_str(),
                format!("unsupported scheme '{}'", api_base.scheme()),
            ));
        }

        Ok(Self { api_base })
    }

    /// Get the API base
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Resolve the streamable audio URL for a track, scoped to a listener
    pub fn stream_url(&self, listener: &ListenerIdentity, track_id: &TrackId) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| CoreError::invalid_api_base(self.api_base.as_str(), "cannot be a base"))?
            .pop_if_empty()
            .extend(["api", "tracks", "audio"]);
        url.query_pairs_mut()
            .append_pair("email", listener.email())
            .append_pair("trackId", track_id.as_str());
        Ok(url)
    }

    /// Resolve the cover-image URL for a track
    ///
    /// Returns `Ok(None)` when the track carries no artwork reference.
    pub fn cover_url(&self, track: &Track) -> Result<Option<Url>> {
        if !track.has_cover() {
            return Ok(None);
        }

        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| CoreError::invalid_api_base(self.api_base.as_str(), "cannot be a base"))?
            .pop_if_empty()
            .extend(["api", "tracks", track.id.as_str(), "cover"]);
        Ok(Some(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listener() -> ListenerIdentity {
        ListenerIdentity::new("Alice", "alice@example.com")
    }

    #[test]
    fn stream_url_carries_listener_and_track() {
        let resolver = SourceResolver::new("http://localhost:8080").unwrap();
        let url = resolver
            .stream_url(&listener(), &TrackId::new("9b1f"))
            .unwrap();

        assert_eq!(url.path(), "/api/tracks/audio");
        assert_eq!(
            url.query(),
            Some("email=alice%40example.com&trackId=9b1f")
        );
    }

    #[test]
    fn stream_url_respects_base_path_prefix() {
        let resolver = SourceResolver::new("https://media.example.com/music/").unwrap();
        let url = resolver
            .stream_url(&listener(), &TrackId::new("t1"))
            .unwrap();

        assert_eq!(url.path(), "/music/api/tracks/audio");
    }

    #[test]
    fn cover_url_only_when_track_has_artwork() {
        let resolver = SourceResolver::new("http://localhost:8080").unwrap();

        let mut track = Track::new("9b1f", "Night Drive", "The Reverbs", "/audio/9b1f.mp3");
        assert_eq!(resolver.cover_url(&track).unwrap(), None);

        track.cover_image_url = Some("/data/covers/9b1f.jpg".to_string());
        let url = resolver.cover_url(&track).unwrap().unwrap();
        assert_eq!(url.path(), "/api/tracks/9b1f/cover");
    }

    #[test]
    fn track_id_is_percent_encoded_in_path() {
        let resolver = SourceResolver::new("http://localhost:8080").unwrap();

        let mut track = Track::new("odd id?", "Song", "Artist", "/audio/x.mp3");
        track.cover_image_url = Some("x".to_string());

        let url = resolver.cover_url(&track).unwrap().unwrap();
        assert_eq!(url.path(), "/api/tracks/odd%20id%3F/cover");
    }

    #[test]
    fn rejects_unusable_bases() {
        assert!(SourceResolver::new("not a url").is_err());
        assert!(SourceResolver::new("mailto:someone@example.com").is_err());
        assert!(SourceResolver::new("ftp://example.com").is_err());
    }
}
