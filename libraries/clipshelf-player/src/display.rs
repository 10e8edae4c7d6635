//! Listing formats

use crate::flags::FlagRecord;
use clipshelf_core::Video;

/// `[tag1 tag2]`, or `[]` without tags
pub fn tags_string(video: &Video) -> String {
    format!("[{}]", video.tags.join(" "))
}

/// `Title (id) [tags]`
pub fn video_line(video: &Video) -> String {
    format!("{} ({}) {}", video.title, video.id, tags_string(video))
}

/// ` - FLAGGED (reason: ...)`
pub fn flag_suffix(record: &FlagRecord) -> String {
    format!(" - FLAGGED (reason: {})", record.reason)
}

/// `n) Title (id) [tags]`, numbered from 1
pub fn search_result_line(number: usize, video: &Video) -> String {
    format!("{}) {}", number, video_line(video))
}
