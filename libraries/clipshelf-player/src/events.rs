//! Player Events
//!
//! Structured counterpart to the console text. Events are queued as
//! operations succeed and drained by the caller:
//! - State changes (play/pause/continue/stop)
//! - Flag changes
//! - Playlist lifecycle and membership changes

use crate::types::PlaybackState;
use clipshelf_core::VideoId;
use serde::{Deserialize, Serialize};

/// Events emitted by the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playback slot changed
    StateChanged {
        /// The new state
        state: PlaybackStatus,
    },

    /// A video started playing
    VideoStarted {
        /// Started video
        video_id: VideoId,
    },

    /// The playing video was stopped (explicitly, by a new play, or by a flag)
    VideoStopped {
        /// Stopped video
        video_id: VideoId,
    },

    /// A video was flagged
    VideoFlagged {
        /// Flagged video
        video_id: VideoId,
        /// Recorded reason
        reason: String,
    },

    /// A flag was removed
    VideoUnflagged {
        /// Allowed video
        video_id: VideoId,
    },

    /// A playlist was created
    PlaylistCreated {
        /// Name as stored
        name: String,
    },

    /// A playlist was deleted
    PlaylistDeleted {
        /// Name as stored
        name: String,
    },

    /// Playlist contents changed (add/remove/clear)
    PlaylistChanged {
        /// Name as stored
        name: String,
        /// New number of videos
        length: usize,
    },
}

/// Playback state without the video payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// Nothing playing
    Idle,
    /// Playing
    Playing,
    /// Paused
    Paused,
}

impl From<&PlaybackState> for PlaybackStatus {
    fn from(state: &PlaybackState) -> Self {
        match state {
            PlaybackState::Idle => PlaybackStatus::Idle,
            PlaybackState::Playing(_) => PlaybackStatus::Playing,
            PlaybackState::Paused(_) => PlaybackStatus::Paused,
        }
    }
}
