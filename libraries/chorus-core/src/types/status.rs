//! Player status types
//!
//! Snapshot structs describing what a player is doing right now. A connector
//! pushes a fresh `PlayerStatus` on its status channel whenever the player
//! reports a change.

use crate::types::{QualityStatus, Song};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether the player is playing, paused or stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayPauseMode {
    #[default]
    Paused,
    Playing,
    Stopped,
}

/// Whether the playqueue is played in random order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RandomMode {
    #[default]
    Off,
    On,
}

/// Whether and how the playqueue repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    #[default]
    Off,
    Single,
    All,
    Album,
}

/// Whether songs are removed from the playqueue after playing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsumeMode {
    #[default]
    Off,
    On,
}

/// Whether the player can currently be reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionStatus {
    /// The status is unknown (probably not yet checked)
    #[default]
    Unknown,
    /// The player can be reached
    Online,
    /// The player is unreachable
    Offline,
}

/// Elapsed and total time of the current song.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeStatus {
    /// Seconds played so far
    pub elapsed_time: u32,
    /// Total length of the song in seconds
    pub track_time: u32,
}

impl TimeStatus {
    /// Elapsed time as "m:ss".
    pub fn elapsed_time_string(&self) -> String {
        format_time(self.elapsed_time)
    }

    /// Track time as "m:ss".
    pub fn track_time_string(&self) -> String {
        format_time(self.track_time)
    }

    /// Remaining time as "m:ss". Zero when elapsed has passed the track time.
    pub fn remaining_time_string(&self) -> String {
        format_time(self.track_time.saturating_sub(self.elapsed_time))
    }
}

fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Position and version of the playqueue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayqueueStatus {
    /// Index of the current song in the playqueue
    pub song_index: u32,
    /// Version number of the playqueue, bumped by the player on every change
    pub version: u32,
    /// Number of songs in the playqueue
    pub length: u32,
}

/// The play modes currently in effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayStatus {
    pub play_pause_mode: PlayPauseMode,
    pub random_mode: RandomMode,
    pub repeat_mode: RepeatMode,
    pub consume_mode: ConsumeMode,
}

/// An audio output exposed by the player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// A unique id for the output
    pub id: String,
    /// Human-readable name of the output
    pub name: String,
    /// Whether the output is enabled
    pub enabled: bool,
}

/// A full snapshot of the player state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatus {
    /// When this snapshot was taken
    pub last_update_time: Option<DateTime<Utc>>,
    /// Elapsed/total time of the current song
    pub time: TimeStatus,
    /// The song currently playing
    pub current_song: Song,
    /// Quality of the current stream
    pub quality: QualityStatus,
    /// Volume between 0.0 and 1.0
    pub volume: f32,
    /// Whether the player supports volume adjustment
    pub volume_enabled: bool,
    /// Play/random/repeat/consume modes
    pub play_status: PlayStatus,
    /// Position and version of the playqueue
    pub playqueue: PlayqueueStatus,
    /// The outputs the player exposes
    pub outputs: Vec<Output>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_strings_render_minutes_and_seconds() {
        let time = TimeStatus {
            elapsed_time: 65,
            track_time: 754,
        };

        assert_eq!(time.elapsed_time_string(), "1:05");
        assert_eq!(time.track_time_string(), "12:34");
        assert_eq!(time.remaining_time_string(), "11:29");
    }

    #[test]
    fn remaining_time_saturates_at_zero() {
        let time = TimeStatus {
            elapsed_time: 100,
            track_time: 90,
        };

        assert_eq!(time.remaining_time_string(), "0:00");
    }
}
