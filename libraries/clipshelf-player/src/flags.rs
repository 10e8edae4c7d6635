//! Moderation flags
//!
//! A flagged video is excluded from playback, random selection, search and
//! new playlist additions. Listings still show it, with its reason.

use crate::types::DEFAULT_FLAG_REASON;
use chrono::{DateTime, Utc};
use clipshelf_core::VideoId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A flag on one video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagRecord {
    /// Flagged video
    pub video_id: VideoId,

    /// Why it was flagged
    pub reason: String,

    /// When it was flagged
    pub flagged_at: DateTime<Utc>,
}

impl FlagRecord {
    /// Create a flag; a missing or empty reason becomes "Not supplied"
    ///
    /// Any other reason is stored exactly as given.
    pub fn new(video_id: VideoId, reason: Option<&str>) -> Self {
        let reason = match reason {
            Some(reason) if !reason.is_empty() => reason.to_string(),
            _ => DEFAULT_FLAG_REASON.to_string(),
        };

        Self {
            video_id,
            reason,
            flagged_at: Utc::now(),
        }
    }
}

/// At most one flag per video id
#[derive(Debug, Clone, Default)]
pub struct FlagRegistry {
    records: HashMap<VideoId, FlagRecord>,
}

impl FlagRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The flag on `id`, if any
    pub fn get(&self, id: &str) -> Option<&FlagRecord> {
        self.records.get(id)
    }

    /// True when `id` is flagged
    pub fn is_flagged(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Record a flag; false (and no change) if the video was already flagged
    pub fn insert(&mut self, record: FlagRecord) -> bool {
        if self.records.contains_key(&record.video_id) {
            return false;
        }
        self.records.insert(record.video_id.clone(), record);
        true
    }

    /// Remove the flag on `id`
    pub fn remove(&mut self, id: &str) -> Option<FlagRecord> {
        self.records.remove(id)
    }

    /// Iterate flags in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &FlagRecord> {
        self.records.values()
    }

    /// Number of flagged videos
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing is flagged
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
