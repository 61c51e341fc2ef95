//! Source types

use serde::{Deserialize, Serialize};

/// The service a library object originates from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    /// Origin unknown or not yet determined
    #[default]
    Unknown,
    /// The player's local music library
    Local,
    /// Spotify
    Spotify,
    /// TuneIn internet radio
    TuneIn,
    /// Podcast feeds
    Podcast,
    /// Shoutcast internet radio
    Shoutcast,
    /// A UPnP media server
    UPnP,
}
