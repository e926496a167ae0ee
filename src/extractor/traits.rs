use crate::downloader::DownloadOptions;
use crate::extractor::models::RawVideoInfo;
use anyhow::Result;
use async_trait::async_trait;

/// The extraction collaborator
///
/// This trait isolates the application from the program that actually
/// resolves URLs and fetches streams (yt-dlp in production, mocks in tests).
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Returns a unique identifier for this extractor (e.g. "ytdlp")
    fn id(&self) -> &'static str;

    /// Extracts video metadata without downloading anything
    async fn extract_info(&self, url: &str) -> Result<RawVideoInfo>;

    /// Downloads (and merges, if needed) the streams chosen by `options.format`
    async fn download(&self, url: &str, options: &DownloadOptions) -> Result<()>;
}
