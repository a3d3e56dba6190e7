//! Cue sequence rendering.

use std::fmt::Write;

use crate::cue::Cue;
use crate::timecode::format_timecode;

/// Concatenate cue texts separated by single line breaks, in document order,
/// with no timing and no numbering.
pub fn to_plain_text(cues: &[Cue]) -> String {
    let mut out = String::new();
    for (i, cue) in cues.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&cue.text);
    }
    out
}

/// Render cues as SubRip blocks: 1-based contiguous index, start/end
/// timecodes joined by ` --> `, the cue text, then a blank line. A pure
/// function of the cue list.
pub fn to_srt(cues: &[Cue]) -> String {
    let mut out = String::new();
    for (i, cue) in cues.iter().enumerate() {
        let _ = writeln!(out, "{}", i + 1);
        let _ = writeln!(
            out,
            "{} --> {}",
            format_timecode(cue.start),
            format_timecode(cue.end())
        );
        let _ = writeln!(out, "{}", cue.text);
        out.push('\n');
    }
    out
}
