/// Characters not allowed in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Strip invalid filename characters from a title or label.
pub fn clean_filename(name: &str) -> String {
    name.chars().filter(|c| !INVALID_CHARS.contains(c)).collect()
}
