use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

pub static VIDEO_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/(?:watch\?(?:.*&)?v=|shorts/|embed/)|youtu\.be/)([A-Za-z0-9_-]{6,11})")
        .unwrap()
});

#[inline]
pub fn capture_group_1<'a>(re: &Regex, input: &'a str) -> Option<&'a str> {
    re.captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the video id from a watch/short/embed URL.
#[inline]
pub fn extract_video_id(url: &str) -> Option<&str> {
    capture_group_1(&VIDEO_ID_REGEX, url)
}

/// Walk a key path into a JSON value. Absence at any step yields `None`.
#[inline]
pub(crate) fn value_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |v, key| v.get(key))
}

/// String at a key path, defaulting to `""`.
#[inline]
pub(crate) fn str_at<'a>(value: &'a Value, path: &[&str]) -> &'a str {
    value_at(value, path).and_then(Value::as_str).unwrap_or("")
}

/// Array at a key path, defaulting to the empty slice.
#[inline]
pub(crate) fn array_at<'a>(value: &'a Value, path: &[&str]) -> &'a [Value] {
    value_at(value, path)
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

/// String field on an object, defaulting to `""`.
#[inline]
pub(crate) fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Numeric field on an object, narrowed to the u32 key space of the variant
/// collections. Out-of-range or non-numeric values yield `None`.
#[inline]
pub(crate) fn u32_field(value: &Value, key: &str) -> Option<u32> {
    value
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_id_from_watch_urls() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=CV7MuLeBKgE&ab_channel=Ab"),
            Some("CV7MuLeBKgE")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?list=PL123&v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/shorts/abc123XYZ_-"),
            Some("abc123XYZ_-")
        );
        assert_eq!(extract_video_id("https://example.com/watch?v=nope"), None);
    }

    #[test]
    fn path_lookups_default_on_absence() {
        let v = json!({"a": {"b": {"c": "x", "n": 720, "list": [1, 2]}}});
        assert_eq!(str_at(&v, &["a", "b", "c"]), "x");
        assert_eq!(str_at(&v, &["a", "missing", "c"]), "");
        assert_eq!(array_at(&v, &["a", "b", "list"]).len(), 2);
        assert!(array_at(&v, &["nope"]).is_empty());
        assert_eq!(u32_field(&v["a"]["b"], "n"), Some(720));
        assert_eq!(u32_field(&v["a"]["b"], "c"), None);
        assert!(value_at(&Value::Null, &["a"]).is_none());
    }
}
