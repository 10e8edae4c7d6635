//! Named playlists
//!
//! Playlists are keyed by their lowercased name so lookup, creation and
//! deletion are case-insensitive, while the stored name keeps the casing it
//! was created with.

use crate::error::{PlayerError, Result};
use chrono::{DateTime, Utc};
use clipshelf_core::VideoId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered, duplicate-free list of video references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    name: String,
    videos: Vec<VideoId>,
    created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            videos: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Name with its original casing
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Videos in insertion order
    pub fn videos(&self) -> &[VideoId] {
        &self.videos
    }

    /// Creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// True when the playlist has no videos
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// True when `id` is in the playlist
    pub fn contains(&self, id: &str) -> bool {
        self.videos.iter().any(|v| v.as_str() == id)
    }

    /// Append a video; false if it was already present
    pub fn push(&mut self, id: VideoId) -> bool {
        if self.contains(id.as_str()) {
            return false;
        }
        self.videos.push(id);
        true
    }

    /// Remove a video; false if it was not present
    pub fn remove(&mut self, id: &str) -> bool {
        match self.videos.iter().position(|v| v.as_str() == id) {
            Some(index) => {
                self.videos.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every video, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.videos.len();
        self.videos.clear();
        removed
    }
}

/// The player's playlist collection
#[derive(Debug, Clone, Default)]
pub struct PlaylistBook {
    /// Lowercased name -> playlist
    playlists: HashMap<String, Playlist>,
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
}

impl PlaylistBook {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty playlist
    pub fn create(&mut self, name: &str) -> Result<&Playlist> {
        let key = normalize(name);
        if self.playlists.contains_key(&key) {
            return Err(PlayerError::PlaylistExists(name.to_string()));
        }
        let playlist: &Playlist = self.playlists.entry(key).or_insert_with(|| Playlist::new(name));
        Ok(playlist)
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&normalize(name))
    }

    /// Case-insensitive mutable lookup
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.get_mut(&normalize(name))
    }

    /// Lookup that reports a missing playlist
    pub fn require(&self, name: &str) -> Result<&Playlist> {
        self.get(name)
            .ok_or_else(|| PlayerError::PlaylistNotFound(name.to_string()))
    }

    /// Mutable lookup that reports a missing playlist
    pub fn require_mut(&mut self, name: &str) -> Result<&mut Playlist> {
        self.get_mut(name)
            .ok_or_else(|| PlayerError::PlaylistNotFound(name.to_string()))
    }

    /// Delete a playlist
    pub fn remove(&mut self, name: &str) -> Result<Playlist> {
        self.playlists
            .remove(&normalize(name))
            .ok_or_else(|| PlayerError::PlaylistNotFound(name.to_string()))
    }

    /// Stored names, sorted ascending
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.playlists.values().map(Playlist::name).collect();
        names.sort_unstable();
        names
    }

    /// Iterate playlists in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// True when no playlists exist
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_playlist_is_stamped() {
        let before = Utc::now();
        let playlist = Playlist::new("Mix");

        assert!(playlist.created_at() >= before);
        assert!(playlist.created_at() <= Utc::now());
        assert!(playlist.is_empty());
    }

    #[test]
    fn push_rejects_duplicates() {
        let mut playlist = Playlist::new("Mix");
        assert!(playlist.push(VideoId::new("a")));
        assert!(playlist.push(VideoId::new("b")));
        assert!(!playlist.push(VideoId::new("a")));

        assert_eq!(playlist.videos(), &[VideoId::new("a"), VideoId::new("b")]);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut playlist = Playlist::new("Mix");
        for id in ["a", "b", "c"] {
            playlist.push(VideoId::new(id));
        }

        assert!(playlist.remove("b"));
        assert!(!playlist.remove("b"));
        assert_eq!(playlist.videos(), &[VideoId::new("a"), VideoId::new("c")]);
    }

    #[test]
    fn clear_reports_count() {
        let mut playlist = Playlist::new("Mix");
        playlist.push(VideoId::new("a"));
        playlist.push(VideoId::new("b"));

        assert_eq!(playlist.clear(), 2);
        assert!(playlist.is_empty());
        assert_eq!(playlist.clear(), 0);
    }

    #[test]
    fn book_lookup_is_case_insensitive() {
        let mut book = PlaylistBook::new();
        book.create("My_Playlist").unwrap();

        assert_eq!(book.get("my_playlist").map(Playlist::name), Some("My_Playlist"));
        assert_eq!(book.get("MY_PLAYLIST").map(Playlist::name), Some("My_Playlist"));
        assert!(book.get("other").is_none());
    }

    #[test]
    fn book_rejects_case_variant() {
        let mut book = PlaylistBook::new();
        let created_at = book.create("Mix").unwrap().created_at();

        let err = book.create("MIX").unwrap_err();
        assert_eq!(err, PlayerError::PlaylistExists("MIX".to_string()));
        assert_eq!(book.len(), 1);

        let playlist = book.get("mix").unwrap();
        assert_eq!(playlist.name(), "Mix");
        assert_eq!(playlist.created_at(), created_at);
    }

    #[test]
    fn book_names_sorted() {
        let mut book = PlaylistBook::new();
        for name in ["zeta", "Alpha", "beta"] {
            book.create(name).unwrap();
        }

        assert_eq!(book.names(), vec!["Alpha", "beta", "zeta"]);
    }

    #[test]
    fn book_remove_is_case_insensitive() {
        let mut book = PlaylistBook::new();
        book.create("Mix").unwrap();

        assert_eq!(book.remove("mIx").unwrap().name(), "Mix");
        assert!(book.is_empty());
        assert!(matches!(book.remove("mix"), Err(PlayerError::PlaylistNotFound(_))));
    }
}
