use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::{Client, header};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ManifestError;
use crate::provider::{DESKTOP_UA, RawManifestProvider};
use crate::utils::capture_group_1;

static PLAYER_RESPONSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ytInitialPlayerResponse\s*=\s*(\{.*?\})\s*;").unwrap());

/// Scrapes the raw player response out of the watch page.
///
/// The page embeds the full player response as a script-inlined JSON
/// assignment; no API key or client version is needed, but stream URLs from
/// this source are not always valid for download (the app provider's are).
pub struct PageProvider {
    client: Client,
    url: String,
}

impl PageProvider {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    async fn try_fetch(&self) -> Result<Value, ManifestError> {
        let body = self
            .client
            .get(&self.url)
            .header(header::USER_AGENT, DESKTOP_UA)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let json_text = extract_player_response(&body).ok_or_else(|| {
            ManifestError::MalformedUpstreamData(
                "player response assignment not found in page".to_owned(),
            )
        })?;

        Ok(serde_json::from_str(json_text)?)
    }
}

fn extract_player_response(body: &str) -> Option<&str> {
    capture_group_1(&PLAYER_RESPONSE_REGEX, body)
}

#[async_trait]
impl RawManifestProvider for PageProvider {
    async fn raw_manifest(&self) -> Value {
        match self.try_fetch().await {
            Ok(raw) => {
                debug!(url = %self.url, "Page manifest fetched");
                raw
            }
            Err(e) => {
                warn!(url = %self.url, error = %e, "Page manifest unavailable, using empty manifest");
                Value::Null
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_inlined_player_response() {
        let body = r#"<script>var ytInitialPlayerResponse = {"videoDetails":{"videoId":"abc"}};var other = 1;</script>"#;
        let json_text = extract_player_response(body).unwrap();
        let raw: Value = serde_json::from_str(json_text).unwrap();
        assert_eq!(raw["videoDetails"]["videoId"], "abc");
    }

    #[test]
    fn missing_assignment_yields_none() {
        assert!(extract_player_response("<html><body>nothing here</body></html>").is_none());
    }
}
