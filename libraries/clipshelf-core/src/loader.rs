//! Catalog file loaders
//!
//! Two on-disk formats are supported:
//! - **Pipe** (`.txt`): one video per line, `Title | video_id | #tag1,#tag2`
//! - **JSON** (`.json`): an array of `{ "id", "title", "tags" }` objects
//!
//! Both go through [`InMemoryCatalog::new`], so empty and duplicate ids are
//! rejected the same way regardless of format.

use crate::catalog::{InMemoryCatalog, VideoCatalog};
use crate::error::{CoreError, Result};
use crate::types::Video;
use std::collections::HashSet;
use std::path::Path;

/// On-disk catalog format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `Title | video_id | tags` lines
    Pipe,
    /// JSON array of video objects
    Json,
}

impl CatalogFormat {
    /// Pick a format from the file extension (anything but `.json` is pipe)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::Json,
            _ => CatalogFormat::Pipe,
        }
    }
}

/// Load a catalog file, choosing the format by extension
pub fn load_catalog(path: &Path) -> Result<InMemoryCatalog> {
    let contents = std::fs::read_to_string(path)?;
    let format = CatalogFormat::from_path(path);

    let catalog = match format {
        CatalogFormat::Pipe => parse_pipe_catalog(&contents)?,
        CatalogFormat::Json => parse_json_catalog(&contents)?,
    };

    tracing::info!(
        "Loaded {} videos from {} ({:?})",
        catalog.len(),
        path.display(),
        format
    );

    Ok(catalog)
}

/// Parse the pipe-separated text format
///
/// Whitespace around fields and tags is trimmed, the tag field may be
/// missing, and blank lines are skipped.
pub fn parse_pipe_catalog(contents: &str) -> Result<InMemoryCatalog> {
    let mut videos = Vec::new();
    let mut seen = HashSet::new();

    for (index, raw) in contents.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split('|').map(str::trim);
        let title = fields.next().unwrap_or_default();
        let id = fields
            .next()
            .ok_or_else(|| CoreError::parse(line_no, "expected 'title | id | tags'"))?;
        let tags = fields.next().map(parse_tags).unwrap_or_default();

        if fields.next().is_some() {
            return Err(CoreError::parse(line_no, "too many '|' separated fields"));
        }

        let video = validate(line_no, Video::new(id, title, tags), &mut seen)?;
        videos.push(video);
    }

    InMemoryCatalog::new(videos)
}

/// Parse the JSON format
pub fn parse_json_catalog(contents: &str) -> Result<InMemoryCatalog> {
    let records: Vec<Video> = serde_json::from_str(contents)?;
    let mut seen = HashSet::new();

    let videos = records
        .into_iter()
        .enumerate()
        .map(|(index, mut video)| {
            video.title = video.title.trim().to_string();
            video.tags = video
                .tags
                .iter()
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect();
            validate(index + 1, video, &mut seen)
        })
        .collect::<Result<Vec<_>>>()?;

    InMemoryCatalog::new(videos)
}

fn parse_tags(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn validate(line: usize, video: Video, seen: &mut HashSet<String>) -> Result<Video> {
    if video.id.is_empty() {
        return Err(CoreError::parse(line, "video id is empty"));
    }
    if !seen.insert(video.id.as_str().to_string()) {
        return Err(CoreError::parse(
            line,
            format!("duplicate video id '{}'", video.id),
        ));
    }
    Ok(video)
}
