//! Chorus Browse
//!
//! Lazy, batched browsing collections for large music libraries.
//!
//! Remote players typically answer a library listing with lightweight
//! placeholder entries (an id, an artist/album pair) and only deliver full
//! metadata when asked per item. This crate provides the piece that makes
//! such listings pleasant to scroll:
//!
//! - **`SectionedList`**: a sectioned collection of placeholder items that
//!   are completed asynchronously, in bounded batches, as coordinates are
//!   requested.
//! - **`SectionItem`**: the contract an element must satisfy (stable id,
//!   text-filter predicate), implemented for the core domain types.
//! - **View-model glue**: the types and traits a browse UI binds against.
//!
//! # Example
//!
//! ```no_run
//! use chorus_browse::{Coordinate, SectionedList};
//! use chorus_core::types::{Artist, SourceType};
//!
//! # async fn example() {
//! let artists = vec![
//!     Artist::new("local::Blur", SourceType::Local, "Blur"),
//!     Artist::new("local::Bowie", SourceType::Local, "David Bowie"),
//! ];
//! let list = SectionedList::new(
//!     vec![("B".to_string(), artists)],
//!     |placeholders: Vec<Artist>| async move {
//!         // Ask the player for full artist data here.
//!         Ok(placeholders)
//!     },
//! );
//!
//! let mut updates = list.request(Coordinate::new(0, 0)).expect("valid coordinate");
//! updates.changed().await.ok();
//! let artist = updates.borrow().item().clone();
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod item;
pub mod sections;
pub mod view_model;
pub mod window;

pub use error::{BrowseError, Result};
pub use item::SectionItem;
pub use sections::{CompletionFn, CompletionFuture, ItemUpdate, LoadStatus, SectionedList};
pub use view_model::{
    AlbumSectionBrowseViewModel, AlbumSections, ArtistSectionBrowseViewModel, ArtistSections,
    BrowseFilter, LoadProgress,
};
pub use window::{Coordinate, WINDOW_RADIUS};
