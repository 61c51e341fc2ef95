//! Song types

use crate::types::{Album, Artist, ArtistType, CoverUri, QualityStatus, SourceType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A generic song object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    /// A unique id for the song. Usage depends on library implementation.
    pub id: String,
    /// The source of this song (i.e. the service like Spotify, Local etc).
    pub source: SourceType,
    /// The location of the song. Usage depends on library implementation.
    pub location: String,
    /// The title of the song.
    pub title: String,
    /// The title of the album on which the song appears.
    pub album: String,
    /// A service specific id for an album.
    pub album_id: Option<String>,
    /// The name of the artist(s) that perform the song.
    pub artist: String,
    /// A service specific id for an artist.
    pub artist_id: Option<String>,
    /// The name of the artist that released the album of which this song is part.
    pub album_artist: String,
    /// The name of the composer of the song.
    pub composer: String,
    /// The performer of the song.
    pub performer: String,
    /// The song's release year.
    pub year: i32,
    /// The names of the genres to which the song belongs.
    pub genre: Vec<String>,
    /// The duration of the song in seconds.
    pub length: u32,
    /// The position of the song within the playqueue.
    pub position: u32,
    /// A unique id of a song in the playqueue.
    pub playqueue_id: Option<String>,
    /// A human-readable comment about this song.
    pub comment: String,
    /// The track number of the song within the album.
    pub track: u32,
    /// The decimal disc number in a multi-disc album.
    pub disc: u32,
    /// Alternative value to sort by when sorting by artist (like "Rolling Stones, The").
    pub sort_artist: String,
    /// Alternative value to sort by when sorting by album-artist.
    pub sort_album_artist: String,
    /// Alternative value to sort by when sorting by album.
    pub sort_album: String,
    /// URI through which cover art can be fetched.
    pub cover_uri: CoverUri,
    /// Date the song was last modified.
    pub last_modified: DateTime<Utc>,
    /// The reported quality of the song.
    pub quality: QualityStatus,
}

impl Default for Song {
    fn default() -> Self {
        Self {
            id: String::new(),
            source: SourceType::default(),
            location: String::new(),
            title: String::new(),
            album: String::new(),
            album_id: None,
            artist: String::new(),
            artist_id: None,
            album_artist: String::new(),
            composer: String::new(),
            performer: String::new(),
            year: 0,
            genre: Vec::new(),
            length: 0,
            position: 0,
            playqueue_id: None,
            comment: String::new(),
            track: 0,
            disc: 0,
            sort_artist: String::new(),
            sort_album_artist: String::new(),
            sort_album: String::new(),
            cover_uri: CoverUri::default(),
            last_modified: DateTime::<Utc>::UNIX_EPOCH,
            quality: QualityStatus::default(),
        }
    }
}

impl Song {
    pub fn new(id: impl Into<String>, source: SourceType, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source,
            title: title.into(),
            ..Song::default()
        }
    }

    /// The album artist, falling back to the song artist when not set.
    pub fn extended_album_artist(&self) -> &str {
        if self.album_artist.is_empty() {
            &self.artist
        } else {
            &self.album_artist
        }
    }

    /// The artist sort name, falling back to the plain artist name.
    pub fn extended_sort_artist(&self) -> &str {
        if self.sort_artist.is_empty() {
            &self.artist
        } else {
            &self.sort_artist
        }
    }

    /// The album-artist sort name, falling back through album artist and
    /// artist sort name to the plain artist name.
    pub fn extended_sort_album_artist(&self) -> &str {
        if !self.sort_album_artist.is_empty() {
            &self.sort_album_artist
        } else if !self.album_artist.is_empty() {
            &self.album_artist
        } else if !self.sort_artist.is_empty() {
            &self.sort_artist
        } else {
            &self.artist
        }
    }

    /// The album sort title, falling back to the album title.
    pub fn extended_sort_album(&self) -> &str {
        if self.sort_album.is_empty() {
            &self.album
        } else {
            &self.sort_album
        }
    }

    /// Derive an `Album` placeholder from the song's album tags.
    pub fn to_album(&self) -> Album {
        let mut album = Album::new(
            format!(
                "{:?}::{}::{}",
                self.source,
                self.extended_album_artist(),
                self.album
            ),
            self.source,
            self.album.clone(),
            self.extended_album_artist(),
        );
        album.year = self.year;
        album.genre = self.genre.clone();
        album.sort_title = self.extended_sort_album().to_string();
        album.sort_artist = Artist::sort_name(self.extended_sort_album_artist(), "");
        album.last_modified = self.last_modified;
        album.cover_uri = self.cover_uri.clone();
        album.quality = self.quality.clone();
        album
    }

    /// Derive an `Artist` placeholder of the requested type from the song's
    /// tags. Returns `None` when the song carries no tag for that role.
    pub fn to_artist(&self, artist_type: ArtistType) -> Option<Artist> {
        let (name, sort_name) = match artist_type {
            ArtistType::Artist => (self.artist.clone(), self.extended_sort_artist().to_string()),
            ArtistType::AlbumArtist => (
                self.extended_album_artist().to_string(),
                self.extended_sort_album_artist().to_string(),
            ),
            ArtistType::Composer | ArtistType::Conductor => {
                (self.composer.clone(), self.composer.clone())
            }
            ArtistType::Performer => (self.performer.clone(), self.performer.clone()),
        };

        if name.is_empty() {
            return None;
        }

        let mut artist = Artist::new(format!("{:?}::{}", self.source, name), self.source, name);
        artist.artist_type = artist_type;
        artist.sort_name = Artist::sort_name(&sort_name, &artist.name);
        Some(artist)
    }
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        // Playqueue entries compare by their queue id, so the same song can
        // appear twice in a queue without the entries being equal.
        if let (Some(lhs), Some(rhs)) = (&self.playqueue_id, &other.playqueue_id) {
            return lhs == rhs;
        }

        self.id == other.id
            && self.source == other.source
            && self.title == other.title
            && self.album == other.album
            && self.artist == other.artist
    }
}

impl Eq for Song {}

impl std::hash::Hash for Song {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song() -> Song {
        let mut song = Song::new("local::song1", SourceType::Local, "Dogs");
        song.album = "Animals".to_string();
        song.artist = "Pink Floyd".to_string();
        song.year = 1977;
        song
    }

    #[test]
    fn extended_album_artist_falls_back_to_artist() {
        let mut song = song();
        assert_eq!(song.extended_album_artist(), "Pink Floyd");

        song.album_artist = "Various Artists".to_string();
        assert_eq!(song.extended_album_artist(), "Various Artists");
    }

    #[test]
    fn to_album_carries_song_tags() {
        let album = song().to_album();

        assert_eq!(album.title, "Animals");
        assert_eq!(album.artist, "Pink Floyd");
        assert_eq!(album.year, 1977);
    }

    #[test]
    fn to_artist_returns_none_for_missing_composer() {
        let song = song();
        assert!(song.to_artist(ArtistType::Composer).is_none());

        let artist = song.to_artist(ArtistType::Artist).expect("artist tag set");
        assert_eq!(artist.name, "Pink Floyd");
        assert_eq!(artist.artist_type, ArtistType::Artist);
    }

    #[test]
    fn playqueue_id_dominates_equality() {
        let mut lhs = song();
        let mut rhs = song();
        assert_eq!(lhs, rhs);

        lhs.playqueue_id = Some("17".to_string());
        rhs.playqueue_id = Some("18".to_string());
        assert_ne!(lhs, rhs);
    }
}
