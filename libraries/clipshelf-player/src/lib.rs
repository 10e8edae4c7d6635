//! Clipshelf - Player
//!
//! Platform-agnostic video player state for Clipshelf.
//!
//! This crate provides:
//! - A single playback slot (play, pause, continue, stop, random play)
//! - Named playlists with case-insensitive names
//! - Title and tag search with a follow-up play prompt
//! - Moderation flags that keep videos out of playback and search
//!
//! # Architecture
//!
//! `clipshelf-player` knows nothing about terminals or files:
//! - The catalog is any [`clipshelf_core::VideoCatalog`]
//! - Text goes in and out through the [`Console`] trait
//!
//! Every operation reports a line of text and also returns a structured
//! result, so callers and tests never need to parse the text.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use clipshelf_core::{InMemoryCatalog, Video};
//! use clipshelf_player::{MemoryConsole, Player, PlayerConfig};
//!
//! let catalog = InMemoryCatalog::new(vec![
//!     Video::new("amy", "Amy", Vec::<String>::new()),
//!     Video::new("bob", "Bob", ["funny"]),
//! ])
//! .unwrap();
//!
//! let mut player = Player::new(Box::new(catalog), MemoryConsole::new(), PlayerConfig::default());
//!
//! player.play("amy").unwrap();
//! player.pause().unwrap();
//! assert!(player.is_paused());
//!
//! assert_eq!(
//!     player.console().lines(),
//!     &["Playing video: Amy", "Pausing video: Amy"]
//! );
//! ```
//!
//! # Example: Flags
//!
//! ```rust
//! use clipshelf_core::{InMemoryCatalog, Video};
//! use clipshelf_player::{ErrorKind, MemoryConsole, Player, PlayerConfig};
//!
//! let catalog = InMemoryCatalog::new(vec![Video::new("bob", "Bob", ["funny"])]).unwrap();
//! let mut player = Player::new(Box::new(catalog), MemoryConsole::new(), PlayerConfig::default());
//!
//! player.flag_video("bob", Some("spam")).unwrap();
//!
//! let err = player.play("bob").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Flagged);
//! ```

mod console;
pub mod display;
mod error;
mod events;
mod flags;
mod manager;
mod playlist;
pub mod search;
pub mod types;

// Public exports
pub use console::{Console, MemoryConsole, StdConsole};
pub use error::{ErrorKind, PlayerError, Result};
pub use events::{PlaybackStatus, PlayerEvent};
pub use flags::{FlagRecord, FlagRegistry};
pub use manager::Player;
pub use playlist::{Playlist, PlaylistBook};
pub use types::{PlaybackState, PlayerConfig, SearchMode, SearchResults, DEFAULT_FLAG_REASON};
