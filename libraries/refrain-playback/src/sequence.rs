//! Ordered track sequence with a current selection
//!
//! The sequence is supplied by an external collaborator (the library or
//! favorites screen) and is read-only input from the transport's point of
//! view: order is significant and is never reshuffled here. Next/previous
//! relations fall out of list order.

use refrain_core::{Track, TrackId};

/// An externally-supplied ordered track list plus the current selection
#[derive(Debug, Clone, Default)]
pub struct TrackSequence {
    tracks: Vec<Track>,
    current: Option<usize>,
}

impl TrackSequence {
    /// Create an empty sequence with no selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sequence selecting the track with the given id
    ///
    /// If the id does not occur in the list the selection stays empty.
    /// Identity is the track id; later duplicates are unreachable by id.
    pub fn with_selection(tracks: Vec<Track>, current_id: &TrackId) -> Self {
        let current = tracks.iter().position(|t| &t.id == current_id);
        Self { tracks, current }
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the sequence has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// All tracks in order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Index of the current selection
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The currently selected track
    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|i| self.tracks.get(i))
    }

    /// Id of the currently selected track
    pub fn current_id(&self) -> Option<&TrackId> {
        self.current_track().map(|t| &t.id)
    }

    /// Whether a track follows the current selection
    pub fn has_next(&self) -> bool {
        match self.current {
            Some(i) => i + 1 < self.tracks.len(),
            None => false,
        }
    }

    /// Whether a track precedes the current selection
    pub fn has_previous(&self) -> bool {
        matches!(self.current, Some(i) if i > 0)
    }

    /// Move the selection one track forward
    ///
    /// Returns false at the last index (or with no selection); the
    /// selection is left unchanged in that case.
    pub fn advance(&mut self) -> bool {
        if self.has_next() {
            self.current = self.current.map(|i| i + 1);
            true
        } else {
            false
        }
    }

    /// Move the selection one track backward
    ///
    /// Returns false at index zero (or with no selection); the selection is
    /// left unchanged in that case.
    pub fn retreat(&mut self) -> bool {
        if self.has_previous() {
            self.current = self.current.map(|i| i - 1);
            true
        } else {
            false
        }
    }

    /// Drop the selection, keeping the tracks
    pub fn clear_selection(&mut self) {
        self.current = None;
    }
}
