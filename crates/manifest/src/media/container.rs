use serde::{Deserialize, Serialize};

/// On-disk container recorded for a variant, derived from its mime type
/// during normalization.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    Mp4,
    Webm,
    Mp4a,
    Opus,
    Jpg,
}

impl Container {
    pub fn as_str(&self) -> &str {
        match self {
            Container::Mp4 => "mp4",
            Container::Webm => "webm",
            Container::Mp4a => "mp4a",
            Container::Opus => "opus",
            Container::Jpg => "jpg",
        }
    }
}
