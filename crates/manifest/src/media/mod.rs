mod container;
mod manifest;
mod variant;

pub use container::Container;
pub use manifest::{MediaManifest, Metadata};
pub use variant::{AudioVariant, ThumbnailVariant, VideoVariant};
