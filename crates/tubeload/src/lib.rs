//! # Tubeload
//!
//! Thin facade over the manifest, fetch and timed-text crates: resolve a
//! video URL into two normalized manifests (page scrape and app API), then
//! expose one retrieve operation per media kind plus subtitle transcoding.
//! Each operation is independent; failure to resolve one media kind never
//! prevents retrieving another.

pub mod error;
pub mod filename;
pub mod tube;

pub use error::TubeError;
pub use filename::clean_filename;
pub use tube::{DownloadOptions, SubtitleFormat, Tube};

pub use fetch_engine::FetchConfig;
pub use yt_manifest::{Container, MediaManifest};
