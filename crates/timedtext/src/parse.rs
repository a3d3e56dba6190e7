//! Timed-text document parsing.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::cue::Cue;
use crate::error::TimedTextError;

/// The cue element name in the upstream timed-text format:
/// `<text start="12.5" dur="2.1">payload</text>`.
const CUE_TAG: &[u8] = b"text";

/// Parse a timed-text document into cues, preserving document order.
///
/// Start and duration attributes are decimal seconds; absent or unparsable
/// values default to `0.0`, and zero-duration cues are kept. Character
/// entities in the payload are unescaped. An empty document yields an empty
/// sequence.
pub fn parse_cues(doc: &str) -> Result<Vec<Cue>, TimedTextError> {
    let mut reader = Reader::from_str(doc);
    let mut cues = Vec::new();

    let mut current: Option<(f64, f64)> = None;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == CUE_TAG => {
                current = Some(cue_timing(&e)?);
                text.clear();
            }
            Event::Empty(e) if e.name().as_ref() == CUE_TAG => {
                let (start, duration) = cue_timing(&e)?;
                cues.push(Cue {
                    start,
                    duration,
                    text: String::new(),
                });
            }
            Event::Text(t) => {
                if current.is_some() {
                    text.push_str(&t.unescape()?);
                }
            }
            Event::End(e) if e.name().as_ref() == CUE_TAG => {
                if let Some((start, duration)) = current.take() {
                    cues.push(Cue {
                        start,
                        duration,
                        text: std::mem::take(&mut text),
                    });
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(cues)
}

fn cue_timing(e: &quick_xml::events::BytesStart<'_>) -> Result<(f64, f64), TimedTextError> {
    let mut start = 0.0;
    let mut duration = 0.0;

    for attr in e.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"start" => start = parse_seconds(&attr.unescape_value()?),
            b"dur" => duration = parse_seconds(&attr.unescape_value()?),
            _ => {}
        }
    }

    Ok((start, duration))
}

fn parse_seconds(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cues_in_document_order() {
        let doc = r#"<?xml version="1.0" encoding="utf-8"?>
<transcript>
<text start="0" dur="2">Hi</text>
<text start="2.5" dur="1">Bye</text>
</transcript>"#;
        let cues = parse_cues(doc).unwrap();
        assert_eq!(
            cues,
            vec![
                Cue {
                    start: 0.0,
                    duration: 2.0,
                    text: "Hi".to_owned()
                },
                Cue {
                    start: 2.5,
                    duration: 1.0,
                    text: "Bye".to_owned()
                },
            ]
        );
    }

    #[test]
    fn unescapes_character_entities() {
        let doc = r#"<transcript><text start="1" dur="1">Tom &amp; Jerry &#39;live&#39;</text></transcript>"#;
        let cues = parse_cues(doc).unwrap();
        assert_eq!(cues[0].text, "Tom & Jerry 'live'");
    }

    #[test]
    fn empty_document_yields_no_cues() {
        assert!(parse_cues("").unwrap().is_empty());
        assert!(parse_cues("<transcript></transcript>").unwrap().is_empty());
    }

    #[test]
    fn tolerates_zero_duration_and_missing_attributes() {
        let doc = r#"<transcript><text start="5.25">No duration</text><text dur="0">No start</text><text/></transcript>"#;
        let cues = parse_cues(doc).unwrap();
        assert_eq!(cues.len(), 3);
        assert_eq!(cues[0].start, 5.25);
        assert_eq!(cues[0].duration, 0.0);
        assert_eq!(cues[1].start, 0.0);
        assert_eq!(cues[2].text, "");
    }

    #[test]
    fn negative_or_garbage_timing_defaults_to_zero() {
        let doc = r#"<transcript><text start="-3" dur="abc">x</text></transcript>"#;
        let cues = parse_cues(doc).unwrap();
        assert_eq!(cues[0].start, 0.0);
        assert_eq!(cues[0].duration, 0.0);
    }
}
