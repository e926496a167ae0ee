//! Application state owned by the UI controller
//!
//! Event handlers call `begin_*` before dispatching work to the backend and
//! `finish_*` with its result. Neither half touches the network, so the whole
//! flow can be driven without a window.

use crate::downloader::DownloadRequest;
use crate::extractor::models::parse_resolution_label;
use crate::extractor::VideoInfo;
use crate::session::notice::Notice;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct Session {
    url: String,
    video: Option<VideoInfo>,
    resolutions: Vec<String>,
    selected_resolution: Option<String>,
    download_dir: PathBuf,
    is_fetching: bool,
    is_downloading: bool,
}

impl Session {
    pub fn new(download_dir: PathBuf) -> Self {
        Self {
            url: String::new(),
            video: None,
            resolutions: Vec::new(),
            selected_resolution: None,
            download_dir,
            is_fetching: false,
            is_downloading: false,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn video(&self) -> Option<&VideoInfo> {
        self.video.as_ref()
    }

    pub fn resolutions(&self) -> &[String] {
        &self.resolutions
    }

    pub fn selected_resolution(&self) -> Option<&str> {
        self.selected_resolution.as_deref()
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    pub fn is_downloading(&self) -> bool {
        self.is_downloading
    }

    /// Whether the download control should accept presses
    pub fn download_enabled(&self) -> bool {
        !self.is_downloading
    }

    /// Select one of the offered resolutions; unknown labels are ignored
    pub fn select_resolution(&mut self, label: &str) {
        if self.resolutions.iter().any(|r| r == label) {
            self.selected_resolution = Some(label.to_string());
        } else {
            warn!("Ignoring unknown resolution '{}'", label);
        }
    }

    /// Validate the URL before a fetch. `Ok` carries the URL to fetch.
    pub fn begin_fetch(&mut self) -> Result<String, Notice> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(Notice::empty_url());
        }
        self.is_fetching = true;
        Ok(url.to_string())
    }

    /// Apply a fetch result. On failure the previous video stays in place.
    pub fn finish_fetch(&mut self, result: Result<VideoInfo, String>) -> Option<Notice> {
        self.is_fetching = false;

        match result {
            Ok(info) => {
                self.resolutions = info.resolution_labels();
                self.selected_resolution = self.resolutions.first().cloned();
                debug!(
                    "Resolutions for '{}': {:?}",
                    info.title, self.resolutions
                );
                self.video = Some(info);
                None
            }
            Err(message) => Some(Notice::fetch_failed(&message)),
        }
    }

    /// Replace the download directory if the picker returned one
    pub fn choose_download_dir(&mut self, picked: Option<PathBuf>) {
        if let Some(dir) = picked {
            debug!("Download directory set to {}", dir.display());
            self.download_dir = dir;
        }
    }

    /// Build the download request and disable the download control.
    ///
    /// `None` when the URL or the selection is empty, or a download is
    /// already running; the caller then does nothing.
    pub fn begin_download(&mut self) -> Option<DownloadRequest> {
        if self.is_downloading {
            return None;
        }
        let url = self.url.trim();
        let label = self.selected_resolution.as_deref().unwrap_or_default();
        if url.is_empty() || label.is_empty() {
            return None;
        }

        let Some(max_height) = parse_resolution_label(label) else {
            warn!("Selected resolution '{}' is not a height", label);
            return None;
        };

        self.is_downloading = true;
        Some(DownloadRequest {
            url: url.to_string(),
            max_height,
            output_dir: self.download_dir.clone(),
        })
    }

    /// Re-enable the download control and report the outcome
    pub fn finish_download(&mut self, result: Result<(), String>) -> Notice {
        self.is_downloading = false;

        match result {
            Ok(()) => Notice::download_succeeded(),
            Err(message) => Notice::download_failed(&message),
        }
    }
}
