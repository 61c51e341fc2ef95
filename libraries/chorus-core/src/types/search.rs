//! Search results

use crate::types::{Album, Artist, Playlist, Song};
use serde::{Deserialize, Serialize};

/// The result of a search across a library, bucketed by object type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    pub songs: Vec<Song>,
    pub albums: Vec<Album>,
    pub artists: Vec<Artist>,
    pub playlists: Vec<Playlist>,
}

impl SearchResult {
    /// Whether no bucket holds any result.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
            && self.albums.is_empty()
            && self.artists.is_empty()
            && self.playlists.is_empty()
    }
}
