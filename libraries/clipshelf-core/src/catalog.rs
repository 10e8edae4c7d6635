//! Read-only video catalog
//!
//! The player never mutates the catalog; it only looks videos up by id and
//! enumerates them. `VideoCatalog` is that seam.

use crate::error::{CoreError, Result};
use crate::types::{Video, VideoId};
use std::collections::HashMap;

/// Read-only source of videos
///
/// Implementors must resolve the empty id to `None`.
pub trait VideoCatalog {
    /// Look up a video by id
    fn get_video(&self, id: &str) -> Option<&Video>;

    /// All videos, in an implementation-defined order
    fn get_all_videos(&self) -> Vec<&Video>;

    /// Number of videos
    fn len(&self) -> usize {
        self.get_all_videos().len()
    }

    /// True when the catalog holds no videos
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when `id` names a video
    fn contains(&self, id: &str) -> bool {
        self.get_video(id).is_some()
    }
}

/// Catalog held fully in memory
///
/// Enumeration returns videos in load order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    videos: Vec<Video>,
    index: HashMap<VideoId, usize>,
}

impl InMemoryCatalog {
    /// Build a catalog, rejecting empty and duplicate ids
    pub fn new(videos: Vec<Video>) -> Result<Self> {
        let mut index = HashMap::with_capacity(videos.len());

        for (position, video) in videos.iter().enumerate() {
            if video.id.is_empty() {
                return Err(CoreError::invalid_video(format!(
                    "video '{}' has an empty id",
                    video.title
                )));
            }
            if index.insert(video.id.clone(), position).is_some() {
                return Err(CoreError::DuplicateVideo(video.id.clone()));
            }
        }

        tracing::debug!("Catalog built with {} videos", videos.len());

        Ok(Self { videos, index })
    }

    /// Iterate videos in load order
    pub fn iter(&self) -> impl Iterator<Item = &Video> {
        self.videos.iter()
    }
}

impl VideoCatalog for InMemoryCatalog {
    fn get_video(&self, id: &str) -> Option<&Video> {
        self.index.get(id).map(|&position| &self.videos[position])
    }

    fn get_all_videos(&self) -> Vec<&Video> {
        self.videos.iter().collect()
    }

    fn len(&self) -> usize {
        self.videos.len()
    }
}
