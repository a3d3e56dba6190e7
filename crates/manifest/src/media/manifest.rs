use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AudioVariant, ThumbnailVariant, VideoVariant};

/// Descriptive metadata for one video resource.
///
/// Every field defaults to empty when the upstream data omits it; absence is
/// never an error.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub id: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// The normalized, typed description of all variants and metadata for one
/// video resource.
///
/// Each variant collection is keyed by its selection dimension (height for
/// video and thumbnails, bitrate for audio). Collections are always present;
/// an empty map represents "no variants", never `None`. A manifest is built
/// once per resolution request and not mutated afterwards - rebuilding means
/// re-running [`normalize`](crate::normalize) on a fresh raw manifest.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaManifest {
    pub metadata: Metadata,
    /// Pre-muxed audio+video streams, keyed by height.
    pub video_variants: BTreeMap<u32, VideoVariant>,
    /// Video-only adaptive streams, keyed by height.
    pub muted_video_variants: BTreeMap<u32, VideoVariant>,
    /// Audio-only adaptive streams, keyed by bitrate.
    pub audio_variants: BTreeMap<u32, AudioVariant>,
    /// Thumbnails, keyed by height.
    pub thumbnail_variants: BTreeMap<u32, ThumbnailVariant>,
    /// Subtitle tracks: language label -> timed-text document URL.
    /// The label defaults to `"N/A"` when the upstream name is absent.
    pub subtitle_tracks: BTreeMap<String, String>,
}

impl MediaManifest {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.video_variants.is_empty()
            && self.muted_video_variants.is_empty()
            && self.audio_variants.is_empty()
            && self.thumbnail_variants.is_empty()
            && self.subtitle_tracks.is_empty()
    }
}
