/// Clipshelf Shell - line-oriented command shell over the video player
pub mod command;
pub mod config;
pub mod error;
pub mod repl;

pub use command::Command;
pub use config::ShellConfig;
pub use error::{Result, ShellError};
pub use repl::{Flow, Shell};

use clipshelf_player::{Console, Player};

/// Load the configured catalog and build a player over it
pub fn build_player<C: Console>(config: &ShellConfig, console: C) -> Result<Player<C>> {
    let catalog = clipshelf_core::load_catalog(&config.catalog.path)?;

    Ok(Player::new(
        Box::new(catalog),
        console,
        config.player_config(),
    ))
}
