use crate::downloader::{DownloadOptions, DownloadRequest, NoopProgress, ProgressHook};
use crate::extractor::{fetch_thumbnail, Extractor, Thumbnail, VideoInfo};
use crate::utils::config::AppSettings;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Result of a metadata fetch, ready for display
#[derive(Debug, Clone)]
pub struct FetchedVideo {
    pub info: VideoInfo,
    pub thumbnail: Option<Thumbnail>,
}

/// Async front door to the extractor and the thumbnail fetch.
///
/// Cheap to clone; the GUI hands a clone to every task it spawns.
#[derive(Clone)]
pub struct Backend {
    extractor: Arc<dyn Extractor>,
    http: reqwest::Client,
    settings: Arc<AppSettings>,
}

impl Backend {
    pub fn new(extractor: Arc<dyn Extractor>, settings: AppSettings) -> Self {
        Self {
            extractor,
            http: reqwest::Client::new(),
            settings: Arc::new(settings),
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Fetch metadata and thumbnail for `url`
    pub async fn fetch_video(&self, url: &str) -> Result<FetchedVideo> {
        info!("Fetching video info via {}: {}", self.extractor.id(), url);

        let raw = self.extractor.extract_info(url).await?;
        let info = VideoInfo::from(raw);

        let thumbnail = if info.thumbnail_url.is_empty() {
            debug!("No thumbnail reported for {}", url);
            None
        } else {
            let bounds = self.settings.thumbnail_size;
            Some(fetch_thumbnail(&self.http, &info.thumbnail_url, bounds).await?)
        };

        info!(
            "Fetched '{}' ({} video formats)",
            info.title,
            info.formats.len()
        );
        Ok(FetchedVideo { info, thumbnail })
    }

    /// Download with the no-op progress hook
    pub async fn download(&self, request: &DownloadRequest) -> Result<()> {
        self.download_with_progress(request, Arc::new(NoopProgress)).await
    }

    pub async fn download_with_progress(
        &self,
        request: &DownloadRequest,
        progress: Arc<dyn ProgressHook>,
    ) -> Result<()> {
        let options = DownloadOptions::for_request(request, &self.settings.merge_output_format)
            .with_progress(progress);
        debug!("Download options: {:?}", options);

        self.extractor.download(&request.url, &options).await
    }
}
