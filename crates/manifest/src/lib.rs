//! Manifest resolution for remote video resources.
//!
//! Upstream player responses arrive as loosely-typed JSON that is structurally
//! similar between the two providers (page scrape and app API) but not
//! guaranteed identical. This crate normalizes either shape into a typed
//! [`MediaManifest`] keyed by quality dimension, and selects variants from it.
//!
//! ## Core Types
//!
//! - [`MediaManifest`] - Typed description of all variants and metadata
//! - [`normalize`] - Pure `RawManifest -> MediaManifest` conversion
//! - [`select`] - Quality selection over a variant collection
//!
//! ## Providers
//!
//! - [`provider::PageProvider`] - Watch-page scrape
//! - [`provider::AppProvider`] - Private app API
//! - [`provider::discover_app_version`] - Client version discovery

pub mod error;
pub mod media;
pub mod normalize;
pub mod provider;
pub mod select;
pub mod utils;

pub use error::ManifestError;
pub use media::{
    AudioVariant, Container, MediaManifest, Metadata, ThumbnailVariant, VideoVariant,
};
pub use normalize::normalize;
pub use provider::RawManifestProvider;
pub use select::select;
pub use utils::extract_video_id;
