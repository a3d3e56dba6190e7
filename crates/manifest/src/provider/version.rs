use std::sync::LazyLock;

use regex::Regex;
use reqwest::{Client, header};
use tracing::{debug, warn};

use crate::error::ManifestError;
use crate::provider::DESKTOP_UA;
use crate::utils::capture_group_1;

/// Used whenever the release listing cannot be fetched or matched. The app
/// API keeps accepting old client versions for a long time, so a stale
/// fallback stays functional.
pub const FALLBACK_VERSION: &str = "19.09.37";

const RELEASES_URL: &str = "https://androidapksfree.com/youtube/com-google-android-youtube/old/";

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"class="limit-line"[^>]*>\s*([0-9]+(?:\.[0-9]+)*)"#).unwrap()
});

/// Discover the newest app client version, falling back to
/// [`FALLBACK_VERSION`] on any failure. The result is consumed as an opaque
/// request parameter by [`AppProvider`](crate::provider::AppProvider).
pub async fn discover_app_version(client: &Client) -> String {
    match try_discover(client).await {
        Ok(version) => {
            debug!(%version, "Discovered app client version");
            version
        }
        Err(e) => {
            warn!(error = %e, fallback = FALLBACK_VERSION, "Version discovery failed, using fallback");
            FALLBACK_VERSION.to_owned()
        }
    }
}

async fn try_discover(client: &Client) -> Result<String, ManifestError> {
    let body = client
        .get(RELEASES_URL)
        .header(header::USER_AGENT, DESKTOP_UA)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    extract_version(&body)
        .map(ToOwned::to_owned)
        .ok_or_else(|| {
            ManifestError::MalformedUpstreamData("version element not found".to_owned())
        })
}

fn extract_version(body: &str) -> Option<&str> {
    capture_group_1(&VERSION_REGEX, body)
}
