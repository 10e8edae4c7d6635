//! Error types for the player
//!
//! Every precondition failure is recoverable: the operation leaves state
//! untouched, reports a line to the console and returns one of these.

use clipshelf_core::VideoId;
use thiserror::Error;

/// Broad classification of a [`PlayerError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Video, playlist or flag record unknown
    NotFound,
    /// Duplicate playlist, flag or playlist membership
    AlreadyExists,
    /// Nothing playing/paused when required, or already paused
    InvalidState,
    /// Blocked by a moderation flag
    Flagged,
    /// Operation on an empty collection (informational)
    Empty,
}

/// Player errors
///
/// The `Display` text is the user-facing reason; the player prefixes it with
/// the failed action when reporting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// No video with this id in the catalog
    #[error("Video does not exist")]
    VideoNotFound(VideoId),

    /// No playlist matches this name
    #[error("Playlist does not exist")]
    PlaylistNotFound(String),

    /// A playlist with a case-insensitively equal name exists
    #[error("A playlist with the same name already exists")]
    PlaylistExists(String),

    /// Video is already a member of the playlist
    #[error("Video already added")]
    AlreadyInPlaylist {
        /// Playlist name as given by the caller
        playlist: String,
        /// Video that was already present
        video_id: VideoId,
    },

    /// Video is not a member of the playlist
    #[error("Video is not in playlist")]
    NotInPlaylist {
        /// Playlist name as given by the caller
        playlist: String,
        /// Video that was missing
        video_id: VideoId,
    },

    /// Playlist has nothing to clear
    #[error("Playlist is empty")]
    PlaylistEmpty(String),

    /// No playlists have been created
    #[error("No playlists exist yet")]
    NoPlaylists,

    /// Video is flagged and cannot be played or added
    #[error("Video is currently flagged (reason: {reason})")]
    Flagged {
        /// Flagged video
        video_id: VideoId,
        /// Reason recorded with the flag
        reason: String,
    },

    /// Video already carries a flag
    #[error("Video is already flagged")]
    AlreadyFlagged(VideoId),

    /// Video carries no flag to remove
    #[error("Video is not flagged")]
    NotFlagged(VideoId),

    /// Playback slot is idle
    #[error("No video is currently playing")]
    NothingPlaying,

    /// Pause requested while already paused
    #[error("Video already paused: {title}")]
    AlreadyPaused {
        /// Title of the paused video
        title: String,
    },

    /// Continue requested while not paused
    #[error("Video is not paused")]
    NotPaused,

    /// Every catalog video is flagged (or the catalog is empty)
    #[error("No videos available")]
    NoVideosAvailable,
}

impl PlayerError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlayerError::VideoNotFound(_)
            | PlayerError::PlaylistNotFound(_)
            | PlayerError::NotInPlaylist { .. }
            | PlayerError::NotFlagged(_) => ErrorKind::NotFound,
            PlayerError::PlaylistExists(_)
            | PlayerError::AlreadyInPlaylist { .. }
            | PlayerError::AlreadyFlagged(_) => ErrorKind::AlreadyExists,
            PlayerError::NothingPlaying
            | PlayerError::AlreadyPaused { .. }
            | PlayerError::NotPaused => ErrorKind::InvalidState,
            PlayerError::Flagged { .. } => ErrorKind::Flagged,
            PlayerError::PlaylistEmpty(_)
            | PlayerError::NoPlaylists
            | PlayerError::NoVideosAvailable => ErrorKind::Empty,
        }
    }
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
