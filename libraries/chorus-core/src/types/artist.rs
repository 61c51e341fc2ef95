//! Artist types

use crate::types::{CoverUri, SourceType};
use serde::{Deserialize, Serialize};

/// The role an artist plays on a recording.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtistType {
    /// Performing artist
    #[default]
    Artist,
    /// Artist credited for the album as a whole
    AlbumArtist,
    /// Performer
    Performer,
    /// Composer
    Composer,
    /// Conductor
    Conductor,
}

/// A generic artist object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artist {
    /// A unique id for the artist. Usage depends on library implementation.
    pub id: String,
    /// The type of artist, used generically for artists, performers and composers.
    pub artist_type: ArtistType,
    /// The source of this artist.
    pub source: SourceType,
    /// The name of the artist.
    pub name: String,
    /// The sortation name of the artist.
    pub sort_name: String,
    /// URI through which cover art can be fetched.
    pub cover_uri: CoverUri,
    /// Summary of the artist biography.
    pub biography_summary: Option<String>,
    /// Biography of the artist.
    pub biography: Option<String>,
}

impl Artist {
    pub fn new(id: impl Into<String>, source: SourceType, name: impl Into<String>) -> Self {
        let name = name.into();
        let sort_name = Artist::sort_name("", &name);
        Self {
            id: id.into(),
            artist_type: ArtistType::Artist,
            source,
            name,
            sort_name,
            cover_uri: CoverUri::default(),
            biography_summary: None,
            biography: None,
        }
    }

    /// Normalize a name for sorting: a leading "The " moves to the end
    /// ("The Beatles" becomes "Beatles, The"). "The The" is kept as-is.
    pub fn sort_name(sort_name: &str, name: &str) -> String {
        let base = if sort_name.is_empty() { name } else { sort_name };
        if base != "The The" && (base.starts_with("The ") || base.starts_with("the ")) {
            format!("{}, The", &base[4..])
        } else {
            base.to_string()
        }
    }
}

impl PartialEq for Artist {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.source == other.source && self.artist_type == other.artist_type
    }
}

impl Eq for Artist {}

impl std::hash::Hash for Artist {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_name_moves_leading_the() {
        assert_eq!(Artist::sort_name("", "The Beatles"), "Beatles, The");
        assert_eq!(Artist::sort_name("", "the kooks"), "kooks, The");
        assert_eq!(Artist::sort_name("", "Radiohead"), "Radiohead");
    }

    #[test]
    fn sort_name_prefers_explicit_sort_name() {
        assert_eq!(
            Artist::sort_name("Beatles, The", "The Beatles"),
            "Beatles, The"
        );
        assert_eq!(Artist::sort_name("The Cure", "Cure"), "Cure, The");
    }

    #[test]
    fn the_the_stays_untouched() {
        assert_eq!(Artist::sort_name("", "The The"), "The The");
    }

    #[test]
    fn equality_includes_type() {
        let artist = Artist::new("local::X", SourceType::Local, "X");
        let mut composer = artist.clone();
        composer.artist_type = ArtistType::Composer;

        assert_ne!(artist, composer);
    }
}
