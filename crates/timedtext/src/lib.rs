//! # Timed Text
//!
//! Parses the upstream timed-text subtitle document (an XML format whose cue
//! elements carry `start` and `dur` attributes in decimal seconds) into an
//! ordered cue sequence, and renders that sequence as plain text or as
//! SubRip blocks with millisecond timecodes.
//!
//! Cue order always follows document order; it is the ordering guarantee
//! behind SubRip's contiguous 1-based numbering.

pub mod cue;
pub mod error;
pub mod parse;
pub mod render;
pub mod timecode;

pub use cue::Cue;
pub use error::TimedTextError;
pub use parse::parse_cues;
pub use render::{to_plain_text, to_srt};
pub use timecode::format_timecode;
