use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The selected variant carried no URL. Reported before any network or
    /// filesystem work; callers should skip that media kind.
    #[error("no download link available")]
    NoLinkAvailable,

    #[error("upstream rejected the request with HTTP {0}")]
    UpstreamRejected(StatusCode),

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("retrieval cancelled")]
    Cancelled,
}
