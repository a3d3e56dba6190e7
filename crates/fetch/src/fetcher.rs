//! Streaming GET to local file.

use std::path::Path;

use futures::StreamExt;
use humansize::{BINARY, format_size};
use indicatif::ProgressStyle;
use tempfile::NamedTempFile;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio_util::sync::CancellationToken;
use tracing::{Span, debug, info, instrument};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::config::{FetchConfig, create_client};
use crate::error::FetchError;

/// Retrieval engine: one streaming GET per call, bytes committed to disk
/// incrementally in arrival order.
pub struct Fetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl Fetcher {
    /// Create a new fetcher with default configuration.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(FetchConfig::default())
    }

    /// Create a new fetcher with custom configuration.
    pub fn with_config(config: FetchConfig) -> Result<Self, FetchError> {
        let client = create_client(&config)?;
        Ok(Self { client, config })
    }

    /// Create a fetcher around an existing client.
    pub fn with_client(client: reqwest::Client, config: FetchConfig) -> Self {
        Self { client, config }
    }

    /// Retrieve `url` into the file at `dest`, returning the bytes written.
    ///
    /// An empty `url` fails with [`FetchError::NoLinkAvailable`] before any
    /// network or filesystem work. A non-success status fails with
    /// [`FetchError::UpstreamRejected`]. On success the destination file is
    /// created or overwritten atomically (temp file + rename); on failure or
    /// cancellation nothing appears at `dest`.
    ///
    /// The declared content length is a progress hint only: if absent or
    /// wrong, progress reporting degrades but the write still completes
    /// byte-for-byte. No retry is performed; the caller owns retry policy.
    #[instrument(skip(self, token), level = "debug")]
    pub async fn retrieve(
        &self,
        url: &str,
        dest: &Path,
        token: CancellationToken,
    ) -> Result<u64, FetchError> {
        if url.is_empty() {
            return Err(FetchError::NoLinkAvailable);
        }

        tokio::select! {
            _ = token.cancelled() => {
                info!(dest = %dest.display(), "Retrieval cancelled");
                Err(FetchError::Cancelled)
            }
            result = self.retrieve_inner(url, dest, &token) => result,
        }
    }

    async fn retrieve_inner(
        &self,
        url: &str,
        dest: &Path,
        token: &CancellationToken,
    ) -> Result<u64, FetchError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamRejected(status));
        }

        if let Some(content_length) = response.content_length() {
            info!(
                size = %format_size(content_length, BINARY),
                dest = %dest.display(),
                "Retrieval started"
            );
            let style = ProgressStyle::default_bar()
                .template("{spinner:.yellow} [{bar:20.yellow/white}] {bytes}/{total_bytes} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> ");
            Span::current().pb_set_style(&style);
            Span::current().pb_set_length(content_length);
        } else {
            debug!(dest = %dest.display(), "Content length not available, progress degraded");
        }

        // The temp file lives in the destination directory so the final
        // persist is a same-filesystem rename. Dropping it on any error path
        // removes the partial write.
        let dir = dest.parent().filter(|p| !p.as_os_str().is_empty());
        let tmp = match dir {
            Some(dir) => NamedTempFile::new_in(dir)?,
            None => NamedTempFile::new_in(".")?,
        };
        let mut writer = BufWriter::with_capacity(
            self.config.write_buffer_size,
            tokio::fs::File::from_std(tmp.reopen()?),
        );

        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;

        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!(dest = %dest.display(), "Retrieval stream cancelled");
                    return Err(FetchError::Cancelled);
                }
                chunk = stream.next() => match chunk {
                    Some(Ok(bytes)) => {
                        writer.write_all(&bytes).await?;
                        written += bytes.len() as u64;
                        Span::current().pb_inc(bytes.len() as u64);
                    }
                    Some(Err(e)) => return Err(FetchError::Transport(e)),
                    None => break,
                }
            }
        }

        writer.flush().await?;
        drop(writer);

        tmp.persist(dest).map_err(|e| FetchError::Io(e.error))?;

        info!(
            bytes = written,
            dest = %dest.display(),
            "Retrieval complete"
        );
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_url_reports_no_link_and_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.mp4");

        let fetcher = Fetcher::new().unwrap();
        let result = fetcher
            .retrieve("", &dest, CancellationToken::new())
            .await;

        assert!(matches!(result, Err(FetchError::NoLinkAvailable)));
        assert!(!dest.exists());
        // No temp file left behind either.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn pre_cancelled_token_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.mp4");

        let token = CancellationToken::new();
        token.cancel();

        let fetcher = Fetcher::new().unwrap();
        let result = fetcher
            .retrieve("http://127.0.0.1:9/never", &dest, token)
            .await;

        assert!(matches!(result, Err(FetchError::Cancelled)));
        assert!(!dest.exists());
    }
}
