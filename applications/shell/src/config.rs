/// Shell configuration
use crate::error::{Result, ShellError};
use clipshelf_player::PlayerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file, read from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "clipshelf.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShellConfig {
    #[serde(default = "default_catalog")]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub player: PlayerSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerSettings {
    /// Fixed seed for random playback
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ShellConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `clipshelf.toml` is read
    /// if it exists in the working directory.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ShellError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with CLIPSHELF_)
        settings = settings.add_source(
            config::Environment::with_prefix("CLIPSHELF")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.catalog.path.as_os_str().is_empty() {
            return Err(ShellError::Config(
                "Catalog path is required (set CLIPSHELF_CATALOG_PATH)".to_string(),
            ));
        }

        Ok(())
    }

    /// Player settings derived from this configuration
    pub fn player_config(&self) -> PlayerConfig {
        PlayerConfig {
            random_seed: self.player.seed,
        }
    }
}

// Default values
fn default_catalog() -> CatalogSettings {
    CatalogSettings {
        path: default_catalog_path(),
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("videos.txt")
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            player: PlayerSettings::default(),
        }
    }
}
