//! Protocol traits implemented by concrete player connectors
//!
//! A connector crate (MPD, UPnP, ...) provides one `Player` implementation
//! whose `browse()`, `status()` and `control()` accessors hand out the
//! protocol objects for that player. Observables are `tokio::sync::watch`
//! channels: a receiver always carries the latest value and can be awaited
//! for changes.

use crate::error::Result;
use crate::types::{
    Album, Artist, ConnectionStatus, ConsumeMode, PlayerStatus, Playlist, RandomMode, RepeatMode,
    SearchResult, Song, SourceType,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;

/// A generic interface to browse a music library.
#[async_trait]
pub trait Browse: Send + Sync {
    /// Get the songs performed by an artist.
    async fn songs_by_artist(&self, artist: &Artist) -> Result<Vec<Song>>;

    /// Get the albums released by an artist (based on album-artist).
    async fn albums_by_artist(&self, artist: &Artist) -> Result<Vec<Album>>;

    /// Get the songs on an album.
    async fn songs_on_album(&self, album: &Album) -> Result<Vec<Song>>;

    /// Get the songs in a playlist.
    async fn songs_in_playlist(&self, playlist: &Playlist) -> Result<Vec<Song>>;

    /// Search across artists, songs and albums.
    ///
    /// `limit` caps the number of items per bucket, `sources` restricts which
    /// services are searched (empty means all).
    async fn search(&self, text: &str, limit: usize, sources: &[SourceType])
        -> Result<SearchResult>;
}

/// A generic interface to observe the status of a music player.
#[async_trait]
pub trait Status: Send + Sync {
    /// Observable connection status.
    fn connection_status(&self) -> watch::Receiver<ConnectionStatus>;

    /// Observable player status snapshot.
    fn player_status(&self) -> watch::Receiver<PlayerStatus>;

    /// Get a block of songs from the playqueue.
    ///
    /// Returns the songs from `start` up to but not including `end`; the
    /// result may hold fewer songs than requested.
    async fn playqueue_songs(&self, start: usize, end: usize) -> Result<Vec<Song>>;

    /// Trigger a forced refresh of the status.
    fn force_status_refresh(&self);
}

/// A generic interface to control a music player.
#[async_trait]
pub trait Control: Send + Sync {
    /// Start playback.
    async fn play(&self) -> Result<PlayerStatus>;

    /// Start playback of a specific song in the playqueue.
    async fn play_index(&self, index: usize) -> Result<PlayerStatus>;

    /// Pause playback.
    async fn pause(&self) -> Result<PlayerStatus>;

    /// Toggle between play and pause.
    async fn toggle_play_pause(&self) -> Result<PlayerStatus>;

    /// Skip to the next song in the playqueue.
    async fn skip(&self) -> Result<PlayerStatus>;

    /// Go back to the previous song in the playqueue.
    async fn back(&self) -> Result<PlayerStatus>;

    /// Set the random mode.
    async fn set_random(&self, random_mode: RandomMode) -> Result<PlayerStatus>;

    /// Set the repeat mode.
    async fn set_repeat(&self, repeat_mode: RepeatMode) -> Result<PlayerStatus>;

    /// Set the consume mode.
    async fn set_consume(&self, consume_mode: ConsumeMode) -> Result<PlayerStatus>;

    /// Set the volume, between 0.0 and 1.0.
    async fn set_volume(&self, volume: f32) -> Result<PlayerStatus>;

    /// Seek to a position in the current song, in seconds.
    async fn set_seek(&self, seconds: u32) -> Result<PlayerStatus>;

    /// Add songs to the playqueue, replacing the current queue.
    async fn add_songs(&self, songs: &[Song]) -> Result<PlayerStatus>;

    /// Move a song within the playqueue.
    async fn move_song(&self, from: usize, to: usize) -> Result<PlayerStatus>;

    /// Remove the song at the given playqueue position.
    async fn delete_song(&self, at: usize) -> Result<PlayerStatus>;

    /// Save the current playqueue as a playlist.
    async fn save_playlist(&self, name: &str) -> Result<()>;

    /// Remove all songs from the playqueue.
    async fn clear_playqueue(&self) -> Result<PlayerStatus>;
}

/// A generic interface to a music player.
#[async_trait]
pub trait Player: Send + Sync {
    /// A unique id for this player instance.
    fn unique_id(&self) -> String;

    /// Human-readable name of the player.
    fn name(&self) -> String;

    /// Model name of the player, e.g. "MPD" or "Volumio".
    fn model(&self) -> String;

    /// Version of the player software.
    fn version(&self) -> String;

    /// The properties needed to reconnect to this player later.
    fn connection_properties(&self) -> HashMap<String, String>;

    /// The status object for this player.
    fn status(&self) -> Arc<dyn Status>;

    /// The control object for this player.
    fn control(&self) -> Arc<dyn Control>;

    /// The browse object for this player.
    fn browse(&self) -> Arc<dyn Browse>;

    /// Check whether the player currently responds.
    async fn ping(&self) -> bool;
}
