//! Browse view-model glue
//!
//! Declarative types a UI layer binds against. Concrete view models live in
//! player-specific connector crates; this module only fixes their shape.

use crate::sections::SectionedList;
use chorus_core::types::{Album, Artist, ArtistType, Genre, Playlist, SortType};
use tokio::sync::watch;

/// How far a browse view model has progressed loading its data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadProgress {
    /// Nothing requested yet
    #[default]
    NotStarted,
    /// A load is running
    Loading,
    /// Some data is available, more may follow
    DataAvailable,
    /// The load finished without finding anything
    NoDataFound,
    /// All data has been loaded
    AllDataLoaded,
}

/// Filters to apply when loading a list of library objects.
#[derive(Debug, Clone)]
pub enum BrowseFilter {
    Genre(Genre),
    Artist(Artist),
    Album(Album),
    Playlist(Playlist),
    /// Objects added within the last so-many days
    Recent(usize),
    /// A random selection of the given size
    Random(usize),
}

/// Albums grouped into sections, completed lazily.
pub type AlbumSections = SectionedList<Album>;

/// Artists grouped into sections, completed lazily.
pub type ArtistSections = SectionedList<Artist>;

/// A view model producing sectioned albums for a browse screen.
pub trait AlbumSectionBrowseViewModel: Send + Sync {
    /// Observable load progress.
    fn load_progress(&self) -> watch::Receiver<LoadProgress>;

    /// Observable album sections; `None` until the first load resolves.
    fn album_sections(&self) -> watch::Receiver<Option<AlbumSections>>;

    /// The sort order currently applied.
    fn sort(&self) -> SortType;

    /// The sort orders this view model supports.
    fn available_sort_options(&self) -> Vec<SortType>;

    /// Load (or reload) the sections in the given sort order.
    fn load(&self, sort: SortType);
}

/// A view model producing sectioned artists for a browse screen.
pub trait ArtistSectionBrowseViewModel: Send + Sync {
    /// Observable load progress.
    fn load_progress(&self) -> watch::Receiver<LoadProgress>;

    /// Observable artist sections; `None` until the first load resolves.
    fn artist_sections(&self) -> watch::Receiver<Option<ArtistSections>>;

    /// The artist role this view model browses.
    fn artist_type(&self) -> ArtistType;

    /// Load (or reload) the sections with the given filters applied.
    fn load(&self, filters: Vec<BrowseFilter>);
}
