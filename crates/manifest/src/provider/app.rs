use async_trait::async_trait;
use reqwest::{Client, header};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::error::ManifestError;
use crate::provider::RawManifestProvider;

const PLAYER_ENDPOINT: &str = "https://www.youtube.com/youtubei/v1/player";
const ANDROID_SDK_VERSION: u32 = 30;

/// Fetches the raw player response from the private app API.
///
/// Identifies as the Android app (client name + discovered version); stream
/// URLs in this response are the ones the upstream accepts for download.
pub struct AppProvider {
    client: Client,
    video_id: String,
    client_version: String,
    endpoint: String,
}

impl AppProvider {
    pub fn new(
        client: Client,
        video_id: impl Into<String>,
        client_version: impl Into<String>,
    ) -> Self {
        Self {
            client,
            video_id: video_id.into(),
            client_version: client_version.into(),
            endpoint: PLAYER_ENDPOINT.to_owned(),
        }
    }

    /// Override the player endpoint. Test seam only.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn user_agent(&self) -> String {
        format!(
            "com.google.android.youtube/{} (Linux; U; Android 12; GB) gzip",
            self.client_version
        )
    }

    fn payload(&self) -> Value {
        json!({
            "videoId": self.video_id,
            "context": {
                "client": {
                    "clientName": "ANDROID",
                    "clientVersion": self.client_version,
                    "androidSdkVersion": ANDROID_SDK_VERSION,
                }
            }
        })
    }

    async fn try_fetch(&self) -> Result<Value, ManifestError> {
        let raw = self
            .client
            .post(&self.endpoint)
            .header(header::USER_AGENT, self.user_agent())
            .json(&self.payload())
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(raw)
    }
}

#[async_trait]
impl RawManifestProvider for AppProvider {
    async fn raw_manifest(&self) -> Value {
        if self.video_id.is_empty() {
            warn!("No video id, skipping app manifest request");
            return Value::Null;
        }
        match self.try_fetch().await {
            Ok(raw) => {
                debug!(video_id = %self.video_id, "App manifest fetched");
                raw
            }
            Err(e) => {
                warn!(video_id = %self.video_id, error = %e, "App manifest unavailable, using empty manifest");
                Value::Null
            }
        }
    }
}
