//! Catalog filtering and the post-search selection prompt

use crate::types::SearchMode;
use clipshelf_core::Video;

/// True when `video` matches `term` under `mode`
pub fn matches(video: &Video, term: &str, mode: SearchMode) -> bool {
    match mode {
        SearchMode::Title => video.title_contains(term),
        SearchMode::Tag => video.has_tag(term),
    }
}

/// Stable sort by title, ascending
pub fn sort_by_title(videos: &mut [Video]) {
    videos.sort_by(|a, b| a.title.cmp(&b.title));
}

/// Turn a prompt answer into a zero-based result index
///
/// Only plain digits naming a result (1..=count) select anything; every
/// other answer means "no selection".
pub fn parse_selection(answer: &str, count: usize) -> Option<usize> {
    let answer = answer.trim();
    if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match answer.parse::<usize>() {
        Ok(number) if (1..=count).contains(&number) => Some(number - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, title: &str, tags: &[&str]) -> Video {
        Video::new(id, title, tags.iter().copied())
    }

    #[test]
    fn title_mode_is_substring() {
        let amy = video("amy", "Amy", &[]);
        assert!(matches(&amy, "a", SearchMode::Title));
        assert!(matches(&amy, "MY", SearchMode::Title));
        assert!(!matches(&amy, "bob", SearchMode::Title));
    }

    #[test]
    fn tag_mode_is_exact() {
        let bob = video("bob", "Bob", &["funny"]);
        assert!(matches(&bob, "FUNNY", SearchMode::Tag));
        assert!(!matches(&bob, "fun", SearchMode::Tag));
        assert!(!matches(&bob, "bob", SearchMode::Tag));
    }

    #[test]
    fn sort_is_stable_on_equal_titles() {
        let mut videos = vec![
            video("z", "Same", &[]),
            video("b", "Beta", &[]),
            video("a", "Same", &[]),
            video("c", "Alpha", &[]),
        ];
        sort_by_title(&mut videos);

        let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "z", "a"]);
    }

    #[test]
    fn selection_in_range() {
        assert_eq!(parse_selection("1", 3), Some(0));
        assert_eq!(parse_selection(" 3 ", 3), Some(2));
    }

    #[test]
    fn selection_out_of_range_or_garbage() {
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("+1", 3), None);
        assert_eq!(parse_selection("-1", 3), None);
        assert_eq!(parse_selection("one", 3), None);
        assert_eq!(parse_selection("", 3), None);
        assert_eq!(parse_selection("99999999999999999999999", 3), None);
    }
}
