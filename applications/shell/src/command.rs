//! Command language
//!
//! One command per line: a case-insensitive keyword followed by
//! whitespace-separated arguments. `FLAG_VIDEO` takes the rest of the line
//! as its reason.

use crate::error::{Result, ShellError};

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: String },
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { name: String, video_id: String },
    RemoveFromPlaylist { name: String, video_id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    ShowAllPlaylists,
    ShowPlaylist { name: String },
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo { video_id: String },
    Help,
    Exit,
}

/// Keyword and usage for every command, in help order
pub const USAGE: &[(&str, &str)] = &[
    ("NUMBER_OF_VIDEOS", "Shows how many videos are in the library."),
    ("SHOW_ALL_VIDEOS", "Lists all videos from the library."),
    ("PLAY <video_id>", "Plays specified video."),
    ("PLAY_RANDOM", "Plays a random video from the library."),
    ("STOP", "Stop the current video."),
    ("PAUSE", "Pause the current video."),
    ("CONTINUE", "Resume the current paused video."),
    ("SHOW_PLAYING", "Displays the title, video_id and tags of the current video."),
    ("CREATE_PLAYLIST <playlist_name>", "Creates a new (empty) playlist."),
    ("ADD_TO_PLAYLIST <playlist_name> <video_id>", "Adds the requested video to the playlist."),
    ("REMOVE_FROM_PLAYLIST <playlist_name> <video_id>", "Removes the specified video from the playlist."),
    ("CLEAR_PLAYLIST <playlist_name>", "Removes all videos from the playlist."),
    ("DELETE_PLAYLIST <playlist_name>", "Deletes the playlist."),
    ("SHOW_ALL_PLAYLISTS", "Shows all playlists."),
    ("SHOW_PLAYLIST <playlist_name>", "Shows all videos in a playlist."),
    ("SEARCH_VIDEOS <search_term>", "Searches for videos with the search term in the title."),
    ("SEARCH_VIDEOS_WITH_TAG <tag_name>", "Searches for videos with the given tag."),
    ("FLAG_VIDEO <video_id> [reason]", "Mark a video as flagged."),
    ("ALLOW_VIDEO <video_id>", "Removes a flag from a video."),
    ("HELP", "Displays help."),
    ("EXIT", "Terminates the program execution."),
];

impl Command {
    /// Parse one input line
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        let Some(keyword) = line.split_whitespace().next() else {
            return Ok(None);
        };
        let rest = line[keyword.len()..].trim_start();
        let args: Vec<&str> = rest.split_whitespace().collect();
        let keyword = keyword.to_uppercase();

        let command = match keyword.as_str() {
            "NUMBER_OF_VIDEOS" => {
                expect_args(&keyword, &args, 0)?;
                Command::NumberOfVideos
            }
            "SHOW_ALL_VIDEOS" => {
                expect_args(&keyword, &args, 0)?;
                Command::ShowAllVideos
            }
            "PLAY" => {
                expect_args(&keyword, &args, 1)?;
                Command::Play {
                    video_id: args[0].to_string(),
                }
            }
            "PLAY_RANDOM" => {
                expect_args(&keyword, &args, 0)?;
                Command::PlayRandom
            }
            "STOP" => {
                expect_args(&keyword, &args, 0)?;
                Command::Stop
            }
            "PAUSE" => {
                expect_args(&keyword, &args, 0)?;
                Command::Pause
            }
            "CONTINUE" => {
                expect_args(&keyword, &args, 0)?;
                Command::Continue
            }
            "SHOW_PLAYING" => {
                expect_args(&keyword, &args, 0)?;
                Command::ShowPlaying
            }
            "CREATE_PLAYLIST" => {
                expect_args(&keyword, &args, 1)?;
                Command::CreatePlaylist {
                    name: args[0].to_string(),
                }
            }
            "ADD_TO_PLAYLIST" => {
                expect_args(&keyword, &args, 2)?;
                Command::AddToPlaylist {
                    name: args[0].to_string(),
                    video_id: args[1].to_string(),
                }
            }
            "REMOVE_FROM_PLAYLIST" => {
                expect_args(&keyword, &args, 2)?;
                Command::RemoveFromPlaylist {
                    name: args[0].to_string(),
                    video_id: args[1].to_string(),
                }
            }
            "CLEAR_PLAYLIST" => {
                expect_args(&keyword, &args, 1)?;
                Command::ClearPlaylist {
                    name: args[0].to_string(),
                }
            }
            "DELETE_PLAYLIST" => {
                expect_args(&keyword, &args, 1)?;
                Command::DeletePlaylist {
                    name: args[0].to_string(),
                }
            }
            "SHOW_ALL_PLAYLISTS" => {
                expect_args(&keyword, &args, 0)?;
                Command::ShowAllPlaylists
            }
            "SHOW_PLAYLIST" => {
                expect_args(&keyword, &args, 1)?;
                Command::ShowPlaylist {
                    name: args[0].to_string(),
                }
            }
            "SEARCH_VIDEOS" => {
                expect_args(&keyword, &args, 1)?;
                Command::SearchVideos {
                    term: args[0].to_string(),
                }
            }
            "SEARCH_VIDEOS_WITH_TAG" => {
                expect_args(&keyword, &args, 1)?;
                Command::SearchVideosWithTag {
                    tag: args[0].to_string(),
                }
            }
            "FLAG_VIDEO" => {
                let Some(video_id) = args.first() else {
                    return Err(wrong_args(&keyword, 1, 0));
                };
                let reason = rest[video_id.len()..].trim();
                Command::FlagVideo {
                    video_id: video_id.to_string(),
                    reason: (!reason.is_empty()).then(|| reason.to_string()),
                }
            }
            "ALLOW_VIDEO" => {
                expect_args(&keyword, &args, 1)?;
                Command::AllowVideo {
                    video_id: args[0].to_string(),
                }
            }
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => {
                return Err(ShellError::parse(format!(
                    "Unknown command: {keyword}. Type HELP for a list of available commands."
                )))
            }
        };

        Ok(Some(command))
    }
}

fn expect_args(keyword: &str, args: &[&str], expected: usize) -> Result<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(wrong_args(keyword, expected, args.len()))
    }
}

fn wrong_args(keyword: &str, expected: usize, found: usize) -> ShellError {
    ShellError::parse(format!(
        "{keyword} expects {expected} argument(s), got {found}"
    ))
}
