//! Application configuration

use crate::utils::platform;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings
///
/// Lives in memory for the session only; CLI flags override the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Initial download location
    pub download_location: PathBuf,

    /// Container yt-dlp merges separate audio and video streams into
    pub merge_output_format: String,

    /// Bounding box the thumbnail preview is scaled down to fit
    pub thumbnail_size: (u32, u32),

    /// Explicit yt-dlp binary, skipping discovery
    pub ytdlp_path: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            download_location: platform::default_download_dir(),
            merge_output_format: "mp4".to_string(),
            thumbnail_size: (320, 180),
            ytdlp_path: None,
        }
    }
}

impl AppSettings {
    /// Apply command line overrides on top of the defaults
    pub fn with_overrides(mut self, download_dir: Option<PathBuf>, ytdlp: Option<PathBuf>) -> Self {
        if let Some(dir) = download_dir {
            self.download_location = dir;
        }
        if ytdlp.is_some() {
            self.ytdlp_path = ytdlp;
        }
        self
    }
}
