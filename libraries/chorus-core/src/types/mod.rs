//! Domain types for the Chorus connector library

mod album;
mod artist;
mod cover;
mod genre;
mod playlist;
mod quality;
mod search;
mod song;
mod source;
mod status;

pub use album::{Album, SortType};
pub use artist::{Artist, ArtistType};
pub use cover::{CoverUri, EMBEDDED_PREFIX};
pub use genre::Genre;
pub use playlist::Playlist;
pub use quality::{QualityIndicator, QualityStatus, RawEncoding};
pub use search::SearchResult;
pub use song::Song;
pub use source::SourceType;
pub use status::{
    ConnectionStatus, ConsumeMode, Output, PlayPauseMode, PlayStatus, PlayerStatus,
    PlayqueueStatus, RandomMode, RepeatMode, TimeStatus,
};
