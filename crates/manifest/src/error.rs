use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Provider-layer only: the normalizer itself never raises this, all
    /// absent or malformed fields degrade to defaults instead.
    #[error("malformed upstream data: {0}")]
    MalformedUpstreamData(String),
}
