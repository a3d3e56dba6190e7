//! Raw manifest -> [`MediaManifest`] normalization.
//!
//! The raw manifest is an untrusted, loosely-typed player response. Every
//! lookup here uses a default-on-absence policy: a completely empty input
//! yields a manifest with empty metadata and empty variant collections, and
//! nothing in this module can fail.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::media::{
    AudioVariant, Container, MediaManifest, Metadata, ThumbnailVariant, VideoVariant,
};
use crate::utils::{array_at, str_at, str_field, u32_field, value_at};

/// Adaptive video entries are accepted only when their mime type carries one
/// of these codec signatures; the signature determines the recorded
/// container. Anything else in the adaptive list is either audio or a codec
/// we do not keep.
const AV1_MP4_SIGNATURE: &str = "video/mp4; codecs=\"av01.0";
const VP9_WEBM_SIGNATURE: &str = "video/webm; codecs=\"vp9";

const AAC_SIGNATURE: &str = "mp4a";
const OPUS_SIGNATURE: &str = "opus";

/// Label recorded for subtitle tracks whose upstream name is absent.
const UNNAMED_TRACK_LABEL: &str = "N/A";

/// Normalize a raw player response into a typed manifest.
///
/// Pure and total: no I/O, no side effects, and no failure mode. Calling it
/// twice on the same input yields structurally equal manifests.
///
/// Duplicate quality keys within one source list resolve last-wins, matching
/// the iteration order of the raw list (upstream tends to emit
/// higher-fidelity entries later; treated as a stated contract, not a
/// verified upstream guarantee).
pub fn normalize(raw: &Value) -> MediaManifest {
    MediaManifest {
        metadata: collect_metadata(raw),
        video_variants: collect_video_variants(raw),
        muted_video_variants: collect_muted_video_variants(raw),
        audio_variants: collect_audio_variants(raw),
        thumbnail_variants: collect_thumbnail_variants(raw),
        subtitle_tracks: collect_subtitle_tracks(raw),
    }
}

fn collect_metadata(raw: &Value) -> Metadata {
    Metadata {
        id: str_at(raw, &["videoDetails", "videoId"]).to_owned(),
        title: str_at(raw, &["videoDetails", "title"]).to_owned(),
        description: str_at(raw, &["videoDetails", "shortDescription"]).to_owned(),
        keywords: array_at(raw, &["videoDetails", "keywords"])
            .iter()
            .filter_map(Value::as_str)
            .map(ToOwned::to_owned)
            .collect(),
    }
}

/// The pre-muxed format list: full audio+video streams, always mp4, no mime
/// filtering. Entries that cannot be keyed by height are skipped.
fn collect_video_variants(raw: &Value) -> BTreeMap<u32, VideoVariant> {
    let mut variants = BTreeMap::new();
    for entry in array_at(raw, &["streamingData", "formats"]) {
        let Some(height) = u32_field(entry, "height") else {
            continue;
        };
        variants.insert(
            height,
            VideoVariant {
                url: str_field(entry, "url").to_owned(),
                mime_type: str_field(entry, "mimeType").to_owned(),
                container: Container::Mp4,
                muted: false,
            },
        );
    }
    variants
}

/// The adaptive format list, video side. Upstream splits audio and video
/// into separate adaptive entries, so everything accepted here is video-only.
fn collect_muted_video_variants(raw: &Value) -> BTreeMap<u32, VideoVariant> {
    let mut variants = BTreeMap::new();
    for entry in array_at(raw, &["streamingData", "adaptiveFormats"]) {
        let mime_type = str_field(entry, "mimeType");
        let container = if mime_type.contains(AV1_MP4_SIGNATURE) {
            Container::Mp4
        } else if mime_type.contains(VP9_WEBM_SIGNATURE) {
            Container::Webm
        } else {
            continue;
        };
        let Some(height) = u32_field(entry, "height") else {
            continue;
        };
        variants.insert(
            height,
            VideoVariant {
                url: str_field(entry, "url").to_owned(),
                mime_type: mime_type.to_owned(),
                container,
                muted: true,
            },
        );
    }
    variants
}

/// The adaptive format list, audio side, keyed by bitrate.
fn collect_audio_variants(raw: &Value) -> BTreeMap<u32, AudioVariant> {
    let mut variants = BTreeMap::new();
    for entry in array_at(raw, &["streamingData", "adaptiveFormats"]) {
        let mime_type = str_field(entry, "mimeType");
        let container = if mime_type.contains(AAC_SIGNATURE) {
            Container::Mp4a
        } else if mime_type.contains(OPUS_SIGNATURE) {
            Container::Opus
        } else {
            continue;
        };
        let Some(bitrate) = u32_field(entry, "bitrate") else {
            continue;
        };
        variants.insert(
            bitrate,
            AudioVariant {
                url: str_field(entry, "url").to_owned(),
                mime_type: mime_type.to_owned(),
                container,
            },
        );
    }
    variants
}

fn collect_thumbnail_variants(raw: &Value) -> BTreeMap<u32, ThumbnailVariant> {
    let mut variants = BTreeMap::new();
    for entry in array_at(raw, &["videoDetails", "thumbnail", "thumbnails"]) {
        let Some(height) = u32_field(entry, "height") else {
            continue;
        };
        variants.insert(height, ThumbnailVariant::new(str_field(entry, "url")));
    }
    variants
}

fn collect_subtitle_tracks(raw: &Value) -> BTreeMap<String, String> {
    let mut tracks = BTreeMap::new();
    for entry in array_at(
        raw,
        &["captions", "playerCaptionsTracklistRenderer", "captionTracks"],
    ) {
        let label = value_at(entry, &["name", "simpleText"])
            .and_then(Value::as_str)
            .unwrap_or(UNNAMED_TRACK_LABEL);
        tracks.insert(label.to_owned(), str_field(entry, "baseUrl").to_owned());
    }
    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_raw() -> Value {
        json!({
            "videoDetails": {
                "videoId": "abc123def45",
                "title": "A title",
                "shortDescription": "A description",
                "keywords": ["one", "two"],
                "thumbnail": {
                    "thumbnails": [
                        {"url": "https://i.example/t90.jpg", "width": 120, "height": 90},
                        {"url": "https://i.example/t720.jpg", "width": 1280, "height": 720}
                    ]
                }
            },
            "streamingData": {
                "formats": [
                    {"url": "https://v.example/360", "mimeType": "video/mp4; codecs=\"avc1.42001E, mp4a.40.2\"", "height": 360},
                    {"url": "https://v.example/720", "mimeType": "video/mp4; codecs=\"avc1.64001F, mp4a.40.2\"", "height": 720}
                ],
                "adaptiveFormats": [
                    {"url": "https://v.example/av1-1080", "mimeType": "video/mp4; codecs=\"av01.0.08M.08\"", "height": 1080, "bitrate": 2_500_000},
                    {"url": "https://v.example/vp9-720", "mimeType": "video/webm; codecs=\"vp9\"", "height": 720, "bitrate": 1_800_000},
                    {"url": "https://v.example/h264-480", "mimeType": "video/mp4; codecs=\"avc1.4d401f\"", "height": 480, "bitrate": 1_000_000},
                    {"url": "https://a.example/aac", "mimeType": "audio/mp4; codecs=\"mp4a.40.2\"", "bitrate": 128_000},
                    {"url": "https://a.example/opus", "mimeType": "audio/webm; codecs=\"opus\"", "bitrate": 160_000}
                ]
            },
            "captions": {
                "playerCaptionsTracklistRenderer": {
                    "captionTracks": [
                        {"baseUrl": "https://s.example/en", "name": {"simpleText": "English"}},
                        {"baseUrl": "https://s.example/unnamed"}
                    ]
                }
            }
        })
    }

    #[test]
    fn empty_input_yields_empty_manifest() {
        let manifest = normalize(&Value::Null);
        assert_eq!(manifest, MediaManifest::empty());
        assert!(manifest.is_empty());
        assert!(manifest.metadata.id.is_empty());
        assert!(manifest.metadata.keywords.is_empty());

        // An object with none of the expected keys behaves the same.
        assert_eq!(normalize(&json!({"unrelated": 1})), MediaManifest::empty());
    }

    #[test]
    fn collects_metadata_with_defaults() {
        let manifest = normalize(&sample_raw());
        assert_eq!(manifest.metadata.id, "abc123def45");
        assert_eq!(manifest.metadata.title, "A title");
        assert_eq!(manifest.metadata.description, "A description");
        assert_eq!(manifest.metadata.keywords, vec!["one", "two"]);
    }

    #[test]
    fn full_formats_are_kept_without_mime_filtering() {
        let manifest = normalize(&sample_raw());
        assert_eq!(manifest.video_variants.len(), 2);
        let v = &manifest.video_variants[&720];
        assert_eq!(v.url, "https://v.example/720");
        assert_eq!(v.container, Container::Mp4);
        assert!(!v.muted);
    }

    #[test]
    fn adaptive_video_is_filtered_by_codec_signature() {
        let manifest = normalize(&sample_raw());
        // The plain h264 adaptive entry (height 480) is dropped.
        assert_eq!(manifest.muted_video_variants.len(), 2);
        assert_eq!(
            manifest.muted_video_variants[&1080].container,
            Container::Mp4
        );
        assert_eq!(
            manifest.muted_video_variants[&720].container,
            Container::Webm
        );
        assert!(manifest.muted_video_variants.values().all(|v| v.muted));
    }

    #[test]
    fn adaptive_audio_is_filtered_by_container_signature() {
        let manifest = normalize(&sample_raw());
        assert_eq!(manifest.audio_variants.len(), 2);
        assert_eq!(manifest.audio_variants[&128_000].container, Container::Mp4a);
        assert_eq!(manifest.audio_variants[&160_000].container, Container::Opus);
    }

    #[test]
    fn thumbnails_and_subtitles_are_copied_unfiltered() {
        let manifest = normalize(&sample_raw());
        assert_eq!(manifest.thumbnail_variants.len(), 2);
        assert_eq!(
            manifest.thumbnail_variants[&720].container,
            Container::Jpg
        );
        assert_eq!(
            manifest.subtitle_tracks["English"],
            "https://s.example/en"
        );
        // Absent track name falls back to the defined default label.
        assert_eq!(
            manifest.subtitle_tracks["N/A"],
            "https://s.example/unnamed"
        );
    }

    #[test]
    fn duplicate_heights_resolve_last_wins() {
        let raw = json!({
            "streamingData": {
                "formats": [
                    {"url": "https://v.example/first", "mimeType": "video/mp4", "height": 720},
                    {"url": "https://v.example/second", "mimeType": "video/mp4", "height": 720}
                ]
            }
        });
        let manifest = normalize(&raw);
        assert_eq!(manifest.video_variants.len(), 1);
        assert_eq!(manifest.video_variants[&720].url, "https://v.example/second");
    }

    #[test]
    fn entries_without_a_key_dimension_are_skipped() {
        let raw = json!({
            "streamingData": {
                "formats": [
                    {"url": "https://v.example/x", "mimeType": "video/mp4"}
                ],
                "adaptiveFormats": [
                    {"url": "https://a.example/x", "mimeType": "audio/mp4; codecs=\"mp4a.40.2\""}
                ]
            }
        });
        let manifest = normalize(&raw);
        assert!(manifest.video_variants.is_empty());
        assert!(manifest.audio_variants.is_empty());
    }

    #[test]
    fn normalize_is_idempotent() {
        let raw = sample_raw();
        assert_eq!(normalize(&raw), normalize(&raw));
    }
}
