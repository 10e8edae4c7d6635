//! Read-eval-print loop
//!
//! Reads commands from the player's console, dispatches them to the player
//! and stops at `EXIT` or end of input.

use crate::command::{Command, USAGE};
use clipshelf_player::{Console, Player, SearchMode};

/// Whether the loop keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive shell around a player
pub struct Shell<C: Console> {
    player: Player<C>,
}

impl<C: Console> Shell<C> {
    pub fn new(player: Player<C>) -> Self {
        Self { player }
    }

    pub fn player(&self) -> &Player<C> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player<C> {
        &mut self.player
    }

    pub fn into_player(self) -> Player<C> {
        self.player
    }

    /// Run until `EXIT` or end of input
    pub fn run(&mut self) {
        let console = self.player.console_mut();
        console.display("Hello and welcome to Clipshelf! What would you like to do?");
        console.display("Enter a command, HELP for a list of commands, or EXIT to quit.");

        loop {
            let Some(line) = self.player.console_mut().prompt_line() else {
                tracing::debug!("End of input");
                break;
            };

            if self.execute_line(&line) == Flow::Exit {
                break;
            }
        }

        self.player.console_mut().display("Clipshelf exited. Goodbye!");
    }

    /// Parse and run one input line
    ///
    /// Parse errors are displayed and the loop continues.
    pub fn execute_line(&mut self, line: &str) -> Flow {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Flow::Continue,
            Err(e) => {
                tracing::debug!("Rejected input '{}': {}", line, e);
                self.player.console_mut().display(&e.to_string());
                Flow::Continue
            }
        }
    }

    /// Run one parsed command
    pub fn execute(&mut self, command: Command) -> Flow {
        let player = &mut self.player;

        // The player has already displayed any failure
        let result = match command {
            Command::NumberOfVideos => {
                player.video_count();
                Ok(())
            }
            Command::ShowAllVideos => {
                player.list_all();
                Ok(())
            }
            Command::Play { video_id } => player.play(&video_id),
            Command::PlayRandom => player.play_random(),
            Command::Stop => player.stop(),
            Command::Pause => player.pause(),
            Command::Continue => player.resume(),
            Command::ShowPlaying => player.show_playing().map(|_| ()),
            Command::CreatePlaylist { name } => player.create_playlist(&name),
            Command::AddToPlaylist { name, video_id } => player.add_to_playlist(&name, &video_id),
            Command::RemoveFromPlaylist { name, video_id } => {
                player.remove_from_playlist(&name, &video_id)
            }
            Command::ClearPlaylist { name } => player.clear_playlist(&name).map(|_| ()),
            Command::DeletePlaylist { name } => player.delete_playlist(&name),
            Command::ShowAllPlaylists => player.list_playlists().map(|_| ()),
            Command::ShowPlaylist { name } => player.show_playlist(&name).map(|_| ()),
            Command::SearchVideos { term } => player.search(&term, SearchMode::Title).map(|_| ()),
            Command::SearchVideosWithTag { tag } => player.search(&tag, SearchMode::Tag).map(|_| ()),
            Command::FlagVideo { video_id, reason } => {
                player.flag_video(&video_id, reason.as_deref())
            }
            Command::AllowVideo { video_id } => player.allow_video(&video_id),
            Command::Help => {
                self.show_help();
                Ok(())
            }
            Command::Exit => return Flow::Exit,
        };

        if let Err(e) = result {
            tracing::debug!("Command failed ({:?}): {}", e.kind(), e);
        }

        for event in self.player.drain_events() {
            tracing::trace!(?event, "Player event");
        }

        Flow::Continue
    }

    fn show_help(&mut self) {
        let console = self.player.console_mut();
        console.display("Available commands:");
        for (usage, description) in USAGE {
            console.display(&format!("    {usage} - {description}"));
        }
    }
}
