//! # Fetch Engine
//!
//! Streaming retrieval of a selected media variant to local storage.
//!
//! One [`Fetcher::retrieve`] call issues a single streaming GET and writes
//! response chunks to the destination in arrival order. There is no internal
//! retry and no range-request resume; callers own any retry policy. Writes
//! go to a temporary file in the destination directory which is persisted
//! (renamed) only on completion, so a mid-stream transport failure leaves
//! nothing at the destination path.

pub mod config;
pub mod error;
pub mod fetcher;

pub use config::{FetchConfig, create_client};
pub use error::FetchError;
pub use fetcher::Fetcher;
