//! The contract items must satisfy to live in a sectioned list

use chorus_core::types::{Album, Artist, Genre};

/// Capability set required of any element stored in a `SectionedList`.
///
/// An item is a value type that is copied into the list at construction time
/// and later replaced wholesale by its completed version. The id must be
/// stable between the placeholder and the completed item, since it is the key
/// used to route batch results back to their cells. Ids should be unique
/// across a list; duplicates are tolerated and all share the same completed
/// value.
pub trait SectionItem: Clone + Send + Sync + 'static {
    /// The stable identifying key of this item.
    fn id(&self) -> &str;

    /// Whether this item matches a free-text filter.
    fn matches(&self, filter: &str) -> bool;
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_uppercase().contains(&needle.to_uppercase())
}

impl SectionItem for Album {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, filter: &str) -> bool {
        contains_ignore_case(&self.title, filter) || contains_ignore_case(&self.artist, filter)
    }
}

impl SectionItem for Artist {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, filter: &str) -> bool {
        contains_ignore_case(&self.name, filter)
    }
}

impl SectionItem for Genre {
    fn id(&self) -> &str {
        &self.id
    }

    fn matches(&self, filter: &str) -> bool {
        contains_ignore_case(&self.name, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_core::types::SourceType;

    #[test]
    fn album_matches_title_or_artist() {
        let album = Album::new("a1", SourceType::Local, "Animals", "Pink Floyd");

        assert!(album.matches("anim"));
        assert!(album.matches("FLOYD"));
        assert!(!album.matches("zeppelin"));
    }

    #[test]
    fn artist_matches_name_case_insensitively() {
        let artist = Artist::new("a1", SourceType::Local, "The Beatles");

        assert!(artist.matches("beatles"));
        assert!(!artist.matches("stones"));
    }
}
