use serde::{Deserialize, Serialize};

use super::Container;

/// One concrete encoded representation of the video at a specific height.
///
/// `muted` distinguishes the pre-muxed (audio+video) list from the
/// adaptive video-only list; both are keyed by height.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VideoVariant {
    pub url: String,
    pub mime_type: String,
    pub container: Container,
    pub muted: bool,
}

/// One audio-only representation, keyed by bitrate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AudioVariant {
    pub url: String,
    pub mime_type: String,
    pub container: Container,
}

/// One thumbnail image, keyed by height. Always a JPEG upstream.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailVariant {
    pub url: String,
    pub container: Container,
}

impl ThumbnailVariant {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            container: Container::Jpg,
        }
    }
}
