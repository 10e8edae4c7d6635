//! Clipshelf Core
//!
//! Platform-agnostic domain types and the catalog seam for Clipshelf.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Video` and `VideoId`
//! - **Catalog Trait**: `VideoCatalog`, the read-only lookup the player depends on
//! - **Loaders**: pipe-separated text and JSON catalog files
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use clipshelf_core::{InMemoryCatalog, Video, VideoCatalog};
//!
//! let catalog = InMemoryCatalog::new(vec![
//!     Video::new("amazing_cats_video_id", "Amazing Cats", ["#cat", "#animal"]),
//!     Video::new("funny_dogs_video_id", "Funny Dogs", ["#dog", "#animal"]),
//! ])
//! .unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert!(catalog.get_video("funny_dogs_video_id").is_some());
//! assert!(catalog.get_video("").is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod loader;
pub mod types;

pub use catalog::{InMemoryCatalog, VideoCatalog};
pub use error::{CoreError, Result};
pub use loader::{load_catalog, parse_json_catalog, parse_pipe_catalog, CatalogFormat};
pub use types::{Video, VideoId};
