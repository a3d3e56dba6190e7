//! Raw manifest providers.
//!
//! Two structurally-similar upstream sources produce the raw player
//! response: the watch-page scrape and the private app API. Both honor the
//! same boundary contract: any failure (transport, status, parse) degrades
//! to an empty raw manifest and is logged, never propagated into the
//! normalization core.

mod app;
mod page;
mod version;

pub use app::AppProvider;
pub use page::PageProvider;
pub use version::{FALLBACK_VERSION, discover_app_version};

use async_trait::async_trait;
use serde_json::Value;

pub(crate) const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36";

#[async_trait]
pub trait RawManifestProvider: Send + Sync {
    /// Fetch the raw manifest, degrading to `Value::Null` on any failure.
    async fn raw_manifest(&self) -> Value;
}
