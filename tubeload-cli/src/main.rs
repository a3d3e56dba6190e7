mod cli;

use std::process;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{Level, error, info};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};
use tubeload::{Container, DownloadOptions, Tube, TubeError};

use crate::cli::{Args, Commands, CommonOpts};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    if let Err(e) = run(args).await {
        error!("Application error: {}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), TubeError> {
    let token = CancellationToken::new();
    let signal_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, cancelling");
            signal_token.cancel();
        }
    });

    match args.command {
        Commands::Info { url } => {
            let tube = Tube::resolve(&url).await?;
            print_info(&tube);
        }
        Commands::Video { url, common } => {
            let tube = Tube::resolve(&url).await?;
            let bytes = tube
                .download_video(&download_options(common), token)
                .await?;
            info!(bytes, "Video download complete");
        }
        Commands::Muted { url, common } => {
            let tube = Tube::resolve(&url).await?;
            let bytes = tube
                .download_muted_video(&download_options(common), token)
                .await?;
            info!(bytes, "Muted video download complete");
        }
        Commands::Audio { url, common } => {
            let tube = Tube::resolve(&url).await?;
            let bytes = tube
                .download_audio(&download_options(common), token)
                .await?;
            info!(bytes, "Audio download complete");
        }
        Commands::Thumbnail { url, common } => {
            let tube = Tube::resolve(&url).await?;
            let bytes = tube
                .download_thumbnail(&download_options(common), token)
                .await?;
            info!(bytes, "Thumbnail download complete");
        }
        Commands::Subtitles {
            url,
            format,
            common,
        } => {
            let tube = Tube::resolve(&url).await?;
            let written = tube
                .download_subtitles(format.into(), &download_options(common), token)
                .await?;
            if written.is_empty() {
                println!("No subtitle tracks available");
            } else {
                for path in &written {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn download_options(common: CommonOpts) -> DownloadOptions {
    DownloadOptions {
        quality: common.quality,
        dir: common.output_dir,
        filename: common.filename,
    }
}

fn print_info(tube: &Tube) {
    println!("Id:          {}", tube.id());
    println!("Title:       {}", tube.title());
    println!("Keywords:    {}", tube.keywords());
    println!("Description: {}", tube.description());
    println!();

    let app = tube.app_manifest();
    let page = tube.page_manifest();
    println!(
        "Video heights:       {}",
        format_variants(app.video_variants.iter().map(|(k, v)| (k, v.container)))
    );
    println!(
        "Muted video heights: {}",
        format_variants(
            app.muted_video_variants
                .iter()
                .map(|(k, v)| (k, v.container))
        )
    );
    println!(
        "Audio bitrates:      {}",
        format_variants(app.audio_variants.iter().map(|(k, v)| (k, v.container)))
    );
    println!(
        "Thumbnail heights:   {}",
        format_variants(page.thumbnail_variants.iter().map(|(k, v)| (k, v.container)))
    );
    println!(
        "Subtitle tracks:     {}",
        page.subtitle_tracks
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    );
}

fn format_variants<'a>(entries: impl Iterator<Item = (&'a u32, Container)>) -> String {
    entries
        .map(|(key, container)| format!("{key} ({})", container.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(verbose)
                .with_writer(indicatif_layer.get_stderr_writer()),
        )
        .with(indicatif_layer)
        .init();
}
