//! Tubegrab - Video Downloader
//!
//! Paste a video URL, preview it, pick a resolution and download it.
//! Extraction and merging are done by yt-dlp (and ffmpeg).

use anyhow::Result;
use clap::Parser;
use iced::Application;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tubegrab::downloader::LogProgress;
use tubegrab::gui::{AppFlags, TubegrabApp};
use tubegrab::utils::{self, AppSettings};
use tubegrab::{Backend, Extractor, Session, YtDlpExtractor};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Initial download folder (defaults to the user's Downloads folder)
    #[arg(long)]
    download_dir: Option<PathBuf>,

    /// Path to the yt-dlp executable (skips discovery)
    #[arg(long)]
    ytdlp: Option<PathBuf>,

    /// Download the given URL without opening a window
    #[arg(long, value_name = "URL")]
    test_download: Option<String>,

    /// Resolution for --test-download, e.g. "720p" (defaults to the highest)
    #[arg(long, requires = "test_download")]
    resolution: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let settings = AppSettings::default().with_overrides(args.download_dir, args.ytdlp);
    let extractor = build_extractor(&settings);

    if !utils::ffmpeg_available() {
        warn!("ffmpeg not found; downloads that need merging will fail");
    }

    let backend = Backend::new(extractor, settings);

    if let Some(url) = args.test_download {
        // Run headless inside a temporary Tokio runtime
        let rt = tokio::runtime::Runtime::new()?;
        return rt.block_on(test_download_cli(backend, url, args.resolution));
    }

    TubegrabApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(800.0, 600.0),
            min_size: Some(iced::Size::new(640.0, 480.0)),
            ..Default::default()
        },
        antialiasing: true,
        ..iced::Settings::with_flags(AppFlags { backend })
    })?;

    Ok(())
}

/// yt-dlp from the settings, discovery, or bare PATH lookup at call time.
///
/// A missing yt-dlp is not fatal: the window still opens and each fetch
/// reports the problem.
fn build_extractor(settings: &AppSettings) -> Arc<dyn Extractor> {
    let extractor = match &settings.ytdlp_path {
        Some(path) => YtDlpExtractor::new(path.clone()),
        None => YtDlpExtractor::discover().unwrap_or_else(|e| {
            warn!("{}", e);
            warn!("Install yt-dlp: pip install yt-dlp, or see https://github.com/yt-dlp/yt-dlp");
            YtDlpExtractor::new(utils::platform::exe_name("yt-dlp"))
        }),
    };
    info!("Using yt-dlp at {}", extractor.ytdlp_path().display());
    Arc::new(extractor)
}

/// Fetch, pick a resolution and download, going through the same session
/// steps as the GUI.
async fn test_download_cli(
    backend: Backend,
    url: String,
    resolution: Option<String>,
) -> Result<()> {
    let mut session = Session::new(backend.settings().download_location.clone());
    session.set_url(url);

    let url = session
        .begin_fetch()
        .map_err(|notice| anyhow::anyhow!(notice.body))?;

    println!("Fetching video info: {}", url);
    let fetched = backend
        .fetch_video(&url)
        .await
        .map(|f| f.info)
        .map_err(|e| format!("{:#}", e));
    if let Some(notice) = session.finish_fetch(fetched) {
        anyhow::bail!(notice.body);
    }

    if let Some(video) = session.video() {
        println!("Title: {}", video.title);
    }
    println!("Resolutions: {}", session.resolutions().join(", "));

    if let Some(label) = resolution {
        session.select_resolution(&label);
    }

    let Some(request) = session.begin_download() else {
        anyhow::bail!("No downloadable resolution available");
    };

    println!(
        "Downloading up to {}p into {}",
        request.max_height,
        request.output_dir.display()
    );
    let result = backend
        .download_with_progress(&request, Arc::new(LogProgress::default()))
        .await
        .map_err(|e| format!("{:#}", e));

    let notice = session.finish_download(result);
    if notice.is_error() {
        error!("{}", notice.body);
        anyhow::bail!(notice.body);
    }

    println!("{}", notice.body);
    Ok(())
}
