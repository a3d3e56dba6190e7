use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use tubeload::SubtitleFormat;

#[derive(Parser)]
#[command(
    name = "tubeload",
    version,
    about = "Resolve a video URL and retrieve its media variants"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print resolved metadata and the available variants
    Info {
        /// Video URL
        url: String,
    },
    /// Download the full (audio+video) stream as mp4
    Video {
        url: String,
        #[command(flatten)]
        common: CommonOpts,
    },
    /// Download the video-only adaptive stream as mp4
    Muted {
        url: String,
        #[command(flatten)]
        common: CommonOpts,
    },
    /// Download the audio-only stream as mp3
    Audio {
        url: String,
        #[command(flatten)]
        common: CommonOpts,
    },
    /// Download the thumbnail as jpg
    Thumbnail {
        url: String,
        #[command(flatten)]
        common: CommonOpts,
    },
    /// Download and transcode every subtitle track
    Subtitles {
        url: String,
        /// Output format for subtitle tracks
        #[arg(long, value_enum, default_value = "srt")]
        format: FormatArg,
        #[command(flatten)]
        common: CommonOpts,
    },
}

#[derive(ClapArgs)]
pub struct CommonOpts {
    /// Explicit quality key (height or bitrate); best available when omitted
    #[arg(short, long)]
    pub quality: Option<u32>,

    /// Destination directory (defaults to the current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Filename override (defaults to the sanitized title)
    #[arg(short, long)]
    pub filename: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FormatArg {
    Srt,
    Txt,
}

impl From<FormatArg> for SubtitleFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Srt => SubtitleFormat::Srt,
            FormatArg::Txt => SubtitleFormat::Text,
        }
    }
}
