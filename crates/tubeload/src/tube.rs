//! Per-media-kind composition.

use std::path::{Path, PathBuf};

use fetch_engine::{FetchConfig, Fetcher, create_client};
use timedtext::{parse_cues, to_plain_text, to_srt};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use yt_manifest::provider::{AppProvider, PageProvider, discover_app_version};
use yt_manifest::{MediaManifest, RawManifestProvider, extract_video_id, normalize, select};

use crate::error::TubeError;
use crate::filename::clean_filename;

/// Options shared by every download operation.
#[derive(Debug, Clone, Default)]
pub struct DownloadOptions {
    /// Explicit quality key (height or bitrate). `None` selects the best.
    pub quality: Option<u32>,
    /// Destination directory. Defaults to the current directory.
    pub dir: Option<PathBuf>,
    /// Filename override. Defaults to the sanitized title.
    pub filename: Option<String>,
}

impl DownloadOptions {
    pub fn quality(mut self, quality: u32) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

/// Output format for subtitle tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    Srt,
    Text,
}

impl SubtitleFormat {
    pub fn extension(&self) -> &str {
        match self {
            SubtitleFormat::Srt => "srt",
            SubtitleFormat::Text => "txt",
        }
    }
}

/// One resolved video resource.
///
/// Holds both normalized manifests for the session: stream URLs come from
/// the app manifest (the upstream only serves valid links to the app
/// client), while metadata, thumbnails and subtitle tracks come from the
/// page manifest. Manifests are immutable once resolved; re-resolving means
/// building a new `Tube`.
pub struct Tube {
    client: reqwest::Client,
    fetcher: Fetcher,
    page_manifest: MediaManifest,
    app_manifest: MediaManifest,
}

impl Tube {
    /// Resolve a video URL with default configuration.
    pub async fn resolve(url: impl Into<String>) -> Result<Self, TubeError> {
        Self::resolve_with_config(url, FetchConfig::default()).await
    }

    /// Resolve a video URL: page scrape, version discovery, then the app
    /// API, each normalized into a typed manifest. Provider failures
    /// degrade to empty manifests rather than failing resolution.
    pub async fn resolve_with_config(
        url: impl Into<String>,
        config: FetchConfig,
    ) -> Result<Self, TubeError> {
        let url = url.into();
        let client = create_client(&config)?;

        let page_manifest = normalize(
            &PageProvider::new(client.clone(), &url)
                .raw_manifest()
                .await,
        );

        let video_id = extract_video_id(&url)
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| page_manifest.metadata.id.clone());

        let version = discover_app_version(&client).await;
        let app_manifest = normalize(
            &AppProvider::new(client.clone(), video_id, version)
                .raw_manifest()
                .await,
        );

        let fetcher = Fetcher::with_client(client.clone(), config);

        Ok(Self {
            client,
            fetcher,
            page_manifest,
            app_manifest,
        })
    }

    pub fn id(&self) -> &str {
        &self.page_manifest.metadata.id
    }

    pub fn title(&self) -> &str {
        &self.page_manifest.metadata.title
    }

    pub fn description(&self) -> &str {
        &self.page_manifest.metadata.description
    }

    /// Keywords joined as a comma-separated string.
    pub fn keywords(&self) -> String {
        self.page_manifest.metadata.keywords.join(", ")
    }

    pub fn page_manifest(&self) -> &MediaManifest {
        &self.page_manifest
    }

    pub fn app_manifest(&self) -> &MediaManifest {
        &self.app_manifest
    }

    fn output_path(&self, options: &DownloadOptions, extension: &str) -> PathBuf {
        let name = options
            .filename
            .clone()
            .unwrap_or_else(|| clean_filename(self.title()));
        output_dir(options).join(format!("{name}.{extension}"))
    }

    /// Download the full (audio+video) stream as `.mp4`.
    pub async fn download_video(
        &self,
        options: &DownloadOptions,
        token: CancellationToken,
    ) -> Result<u64, TubeError> {
        let variant = select(&self.app_manifest.video_variants, options.quality)
            .ok_or(TubeError::NoVariantAvailable("video"))?;
        let dest = self.output_path(options, "mp4");
        Ok(self.fetcher.retrieve(&variant.url, &dest, token).await?)
    }

    /// Download the video-only adaptive stream as `.mp4`.
    pub async fn download_muted_video(
        &self,
        options: &DownloadOptions,
        token: CancellationToken,
    ) -> Result<u64, TubeError> {
        let variant = select(&self.app_manifest.muted_video_variants, options.quality)
            .ok_or(TubeError::NoVariantAvailable("muted video"))?;
        let dest = self.output_path(options, "mp4");
        Ok(self.fetcher.retrieve(&variant.url, &dest, token).await?)
    }

    /// Download the audio-only stream as `.mp3`.
    pub async fn download_audio(
        &self,
        options: &DownloadOptions,
        token: CancellationToken,
    ) -> Result<u64, TubeError> {
        let variant = select(&self.app_manifest.audio_variants, options.quality)
            .ok_or(TubeError::NoVariantAvailable("audio"))?;
        let dest = self.output_path(options, "mp3");
        Ok(self.fetcher.retrieve(&variant.url, &dest, token).await?)
    }

    /// Download the thumbnail as `.jpg`.
    pub async fn download_thumbnail(
        &self,
        options: &DownloadOptions,
        token: CancellationToken,
    ) -> Result<u64, TubeError> {
        let variant = select(&self.page_manifest.thumbnail_variants, options.quality)
            .ok_or(TubeError::NoVariantAvailable("thumbnail"))?;
        let dest = self.output_path(options, "jpg");
        Ok(self.fetcher.retrieve(&variant.url, &dest, token).await?)
    }

    /// Fetch, transcode and write every subtitle track as
    /// `{name} - {label}.{srt|txt}`. Tracks are independent: a failing
    /// track is logged and skipped, not fatal to the rest. Returns the
    /// paths written.
    pub async fn download_subtitles(
        &self,
        format: SubtitleFormat,
        options: &DownloadOptions,
        token: CancellationToken,
    ) -> Result<Vec<PathBuf>, TubeError> {
        let dir = output_dir(options);
        let base_name = options
            .filename
            .clone()
            .unwrap_or_else(|| clean_filename(self.title()));

        let mut written = Vec::new();
        for (label, track_url) in &self.page_manifest.subtitle_tracks {
            if token.is_cancelled() {
                return Err(TubeError::Fetch(fetch_engine::FetchError::Cancelled));
            }
            if track_url.is_empty() {
                warn!(%label, "Subtitle track has no URL, skipping");
                continue;
            }

            let dest = dir.join(format!(
                "{}.{}",
                clean_filename(&format!("{base_name} - {label}")),
                format.extension()
            ));

            match self.transcode_track(track_url, format).await {
                Ok(rendered) => {
                    tokio::fs::write(&dest, rendered).await?;
                    info!(%label, dest = %dest.display(), "Subtitle track written");
                    written.push(dest);
                }
                Err(e) => {
                    warn!(%label, error = %e, "Subtitle track failed, skipping");
                }
            }
        }
        Ok(written)
    }

    async fn transcode_track(
        &self,
        track_url: &str,
        format: SubtitleFormat,
    ) -> Result<String, TubeError> {
        let doc = self
            .client
            .get(track_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let cues = parse_cues(&doc)?;
        Ok(match format {
            SubtitleFormat::Srt => to_srt(&cues),
            SubtitleFormat::Text => to_plain_text(&cues),
        })
    }
}

fn output_dir(options: &DownloadOptions) -> PathBuf {
    options
        .dir
        .clone()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
}
