use thiserror::Error;

#[derive(Debug, Error)]
pub enum TubeError {
    /// The variant collection for this media kind had no matching entry.
    #[error("no {0} variant available")]
    NoVariantAvailable(&'static str),

    #[error(transparent)]
    Fetch(#[from] fetch_engine::FetchError),

    #[error(transparent)]
    TimedText(#[from] timedtext::TimedTextError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
