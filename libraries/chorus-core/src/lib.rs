//! Chorus Core
//!
//! Platform-agnostic domain types, protocol traits, and error handling for
//! the Chorus music-player connector library.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `Album`, `Artist`, `Playlist`, `PlayerStatus`, etc.
//! - **Protocol Traits**: `Browse`, `Status`, `Control`, `Player`
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! Concrete connectors (MPD, Spotify, UPnP, ...) implement the protocol
//! traits; this crate carries no network or database logic of its own.
//!
//! # Example
//!
//! ```rust
//! use chorus_core::types::{Album, Artist, SourceType};
//!
//! let artist = Artist::new("local::Pink Floyd", SourceType::Local, "Pink Floyd");
//! let album = Album::new("local::Pink Floyd::Animals", SourceType::Local, "Animals", "Pink Floyd");
//! assert_eq!(album.sort_artist, "Pink Floyd");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod protocols;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use protocols::{Browse, Control, Player, Status};

// Export all types
pub use types::{
    Album, Artist, ArtistType, ConnectionStatus, ConsumeMode, CoverUri, Genre, Output,
    PlayPauseMode, PlayStatus, PlayerStatus, Playlist, PlayqueueStatus, QualityIndicator,
    QualityStatus, RandomMode, RawEncoding, RepeatMode, SearchResult, Song, SortType,
    SourceType, TimeStatus,
};
