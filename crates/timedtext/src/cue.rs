/// One timed subtitle entry: start offset and duration in seconds, plus the
/// unescaped text payload. Zero-length cues are valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    pub start: f64,
    pub duration: f64,
    pub text: String,
}

impl Cue {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}
