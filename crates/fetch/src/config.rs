use std::time::Duration;

use reqwest::Client;
use reqwest::redirect::Policy;

use crate::error::FetchError;

/// Descriptive mobile-client identity. Some upstream endpoints only serve
/// valid stream links to this client string.
pub const DEFAULT_USER_AGENT: &str =
    "com.google.android.youtube/19.09.37 (Linux; U; Android 12; GB) gzip";

/// Configurable options for the retrieval engine.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent sent with every retrieval request.
    pub user_agent: String,

    /// Connection timeout (time to establish the initial connection).
    pub connect_timeout: Duration,

    /// Read timeout (maximum time between receiving data chunks).
    pub read_timeout: Duration,

    /// Whether to follow redirects.
    pub follow_redirects: bool,

    /// Capacity of the buffered file writer. Response chunks arrive at
    /// network-determined sizes; this bounds how much is held before hitting
    /// the disk.
    pub write_buffer_size: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            connect_timeout: Duration::from_secs(30),
            read_timeout: Duration::from_secs(30),
            follow_redirects: true,
            write_buffer_size: 64 * 1024,
        }
    }
}

impl FetchConfig {
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_write_buffer_size(mut self, size: usize) -> Self {
        self.write_buffer_size = size;
        self
    }
}

/// Build the HTTP client used for retrievals.
pub fn create_client(config: &FetchConfig) -> Result<Client, FetchError> {
    let redirect_policy = if config.follow_redirects {
        Policy::limited(10)
    } else {
        Policy::none()
    };

    let client = Client::builder()
        .connect_timeout(config.connect_timeout)
        .read_timeout(config.read_timeout)
        .redirect(redirect_policy)
        .build()?;

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_identifies_as_mobile_client() {
        let config = FetchConfig::default();
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(config.user_agent.starts_with("com.google.android.youtube/"));
        assert_eq!(config.write_buffer_size, 64 * 1024);
    }

    #[test]
    fn builds_client_from_default_config() {
        assert!(create_client(&FetchConfig::default()).is_ok());
    }
}
