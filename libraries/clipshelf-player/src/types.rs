//! Core types for the player

use clipshelf_core::{Video, VideoId};
use serde::{Deserialize, Serialize};

/// Reason recorded when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Playback slot
///
/// A paused video is still the playing video; pausing only suspends it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No video playing
    #[default]
    Idle,

    /// Video playing, not paused
    Playing(Video),

    /// Video playing and paused
    Paused(Video),
}

impl PlaybackState {
    /// The video in the slot, paused or not
    pub fn video(&self) -> Option<&Video> {
        match self {
            PlaybackState::Idle => None,
            PlaybackState::Playing(video) | PlaybackState::Paused(video) => Some(video),
        }
    }

    /// True when nothing is playing
    pub fn is_idle(&self) -> bool {
        matches!(self, PlaybackState::Idle)
    }

    /// True when the slot holds a paused video
    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused(_))
    }

    /// True when `id` is the playing (or paused) video
    pub fn holds(&self, id: &str) -> bool {
        self.video().is_some_and(|video| video.id.as_str() == id)
    }

    pub(crate) fn into_video(self) -> Option<Video> {
        match self {
            PlaybackState::Idle => None,
            PlaybackState::Playing(video) | PlaybackState::Paused(video) => Some(video),
        }
    }
}

/// Which field a search matches against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    /// Case-insensitive substring of the title
    Title,

    /// Case-insensitive exact tag
    Tag,
}

/// Outcome of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    /// Matching videos, sorted by title
    pub matches: Vec<Video>,

    /// Video played from the follow-up prompt, if any
    pub selected: Option<VideoId>,
}

impl SearchResults {
    /// True when nothing matched
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Configuration for the player
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Seed for random selection (default: entropy)
    pub random_seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> Video {
        Video::new(id, format!("Video {id}"), ["#tag"])
    }

    #[test]
    fn default_state_is_idle() {
        let state = PlaybackState::default();
        assert!(state.is_idle());
        assert!(state.video().is_none());
    }

    #[test]
    fn paused_still_holds_video() {
        let state = PlaybackState::Paused(video("a"));
        assert!(state.is_paused());
        assert!(state.holds("a"));
        assert!(!state.holds("b"));
        assert_eq!(state.video().map(|v| v.id.as_str()), Some("a"));
    }

    #[test]
    fn default_config_uses_entropy() {
        assert!(PlayerConfig::default().random_seed.is_none());
    }
}
