//! Playlist types

use crate::types::{CoverUri, SourceType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A generic playlist object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// A unique id for the playlist. Usage depends on library implementation.
    pub id: String,
    /// The source of this playlist.
    pub source: SourceType,
    /// The name of the playlist.
    pub name: String,
    /// The date the playlist was last modified.
    pub last_modified: DateTime<Utc>,
    /// Whether the user can make changes to this playlist.
    pub editable: bool,
    /// The total duration of the playlist in seconds.
    pub duration: Option<u32>,
    /// The number of songs in the playlist.
    pub number_of_songs: Option<u32>,
    /// An image to show for this playlist.
    pub image: Option<CoverUri>,
    /// A small image to show for this playlist.
    pub mini_image: Option<CoverUri>,
    /// A list of genres included in this playlist.
    pub genres: Option<Vec<String>>,
    /// A description of the content of the playlist.
    pub description: Option<String>,
}

impl Default for Playlist {
    fn default() -> Self {
        Self {
            id: String::new(),
            source: SourceType::default(),
            name: String::new(),
            last_modified: DateTime::<Utc>::UNIX_EPOCH,
            editable: true,
            duration: None,
            number_of_songs: None,
            image: None,
            mini_image: None,
            genres: None,
            description: None,
        }
    }
}

impl Playlist {
    pub fn new(id: impl Into<String>, source: SourceType, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source,
            name: name.into(),
            ..Playlist::default()
        }
    }
}

impl PartialEq for Playlist {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.source == other.source
    }
}

impl Eq for Playlist {}

impl std::hash::Hash for Playlist {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
