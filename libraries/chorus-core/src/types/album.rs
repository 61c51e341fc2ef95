//! Album types

use crate::types::{Artist, CoverUri, QualityStatus, SourceType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How to sort a list of albums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortType {
    /// By artist sort-name, then year, then title
    #[default]
    Artist,
    /// Oldest release first
    Year,
    /// Newest release first
    YearReverse,
    /// By title
    Title,
}

/// A generic album object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    /// A unique id for the album. Usage depends on library implementation.
    pub id: String,
    /// The source of this album.
    pub source: SourceType,
    /// The location of the album. Usage depends on library implementation.
    pub location: String,
    /// The title of the album.
    pub title: String,
    /// The sortation title of the album.
    pub sort_title: String,
    /// The name of the artist(s) that released the album.
    pub artist: String,
    /// A service specific id for an artist.
    pub artist_id: Option<String>,
    /// The sortation version of the artist(s) that released the album.
    pub sort_artist: String,
    /// The year the album was released.
    pub year: i32,
    /// The names of the genres to which the album belongs.
    pub genre: Vec<String>,
    /// The total duration of the album in seconds.
    pub length: u32,
    /// URI through which cover art can be fetched.
    pub cover_uri: CoverUri,
    /// Date the album was last modified.
    pub last_modified: DateTime<Utc>,
    /// The reported quality of the album.
    pub quality: QualityStatus,
    /// A description of the album.
    pub description: String,
}

impl Default for Album {
    fn default() -> Self {
        Self {
            id: String::new(),
            source: SourceType::default(),
            location: String::new(),
            title: String::new(),
            sort_title: String::new(),
            artist: String::new(),
            artist_id: None,
            sort_artist: String::new(),
            year: 0,
            genre: Vec::new(),
            length: 0,
            cover_uri: CoverUri::default(),
            last_modified: DateTime::<Utc>::UNIX_EPOCH,
            quality: QualityStatus::default(),
            description: String::new(),
        }
    }
}

impl Album {
    pub fn new(
        id: impl Into<String>,
        source: SourceType,
        title: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let artist = artist.into();
        Self {
            id: id.into(),
            source,
            sort_title: title.clone(),
            sort_artist: Artist::sort_name("", &artist),
            title,
            artist,
            ..Album::default()
        }
    }

    /// Sort albums according to the requested sort type.
    ///
    /// Year sorts fall back to artist and title for albums from the same year,
    /// so the order is stable across reloads.
    pub fn sort(albums: &mut [Album], sort: SortType) {
        albums.sort_by(|lhs, rhs| {
            match sort {
                SortType::Year => lhs
                    .year
                    .cmp(&rhs.year)
                    .then_with(|| compare_case_insensitive(&lhs.sort_artist, &rhs.sort_artist))
                    .then_with(|| compare_case_insensitive(&lhs.sort_title, &rhs.sort_title)),
                SortType::YearReverse => rhs
                    .year
                    .cmp(&lhs.year)
                    .then_with(|| compare_case_insensitive(&lhs.sort_artist, &rhs.sort_artist))
                    .then_with(|| compare_case_insensitive(&lhs.sort_title, &rhs.sort_title)),
                SortType::Artist => compare_case_insensitive(&lhs.sort_artist, &rhs.sort_artist)
                    .then_with(|| lhs.year.cmp(&rhs.year))
                    .then_with(|| compare_case_insensitive(&lhs.sort_title, &rhs.sort_title)),
                SortType::Title => compare_case_insensitive(&lhs.sort_title, &rhs.sort_title)
                    .then_with(|| compare_case_insensitive(&lhs.sort_artist, &rhs.sort_artist)),
            }
        });
    }
}

fn compare_case_insensitive(lhs: &str, rhs: &str) -> std::cmp::Ordering {
    lhs.to_lowercase().cmp(&rhs.to_lowercase())
}

impl PartialEq for Album {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.source == other.source
    }
}

impl Eq for Album {}

impl std::hash::Hash for Album {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(title: &str, artist: &str, year: i32) -> Album {
        let mut album = Album::new(
            format!("local::{artist}::{title}"),
            SourceType::Local,
            title,
            artist,
        );
        album.year = year;
        album
    }

    #[test]
    fn sort_by_year() {
        let mut albums = vec![
            album("Animals", "Pink Floyd", 1977),
            album("Meddle", "Pink Floyd", 1971),
            album("The Wall", "Pink Floyd", 1979),
        ];

        Album::sort(&mut albums, SortType::Year);
        let titles: Vec<_> = albums.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Meddle", "Animals", "The Wall"]);

        Album::sort(&mut albums, SortType::YearReverse);
        let titles: Vec<_> = albums.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["The Wall", "Animals", "Meddle"]);
    }

    #[test]
    fn sort_by_artist_uses_sort_names() {
        let mut albums = vec![
            album("Abbey Road", "The Beatles", 1969),
            album("Animals", "Pink Floyd", 1977),
        ];

        Album::sort(&mut albums, SortType::Artist);
        // "Beatles, The" sorts before "Pink Floyd"
        assert_eq!(albums[0].title, "Abbey Road");
    }

    #[test]
    fn equality_is_by_id_and_source() {
        let lhs = album("Animals", "Pink Floyd", 1977);
        let mut rhs = lhs.clone();
        rhs.year = 0;
        rhs.description = "different metadata".to_string();

        assert_eq!(lhs, rhs);
    }
}
