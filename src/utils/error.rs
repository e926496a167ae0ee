//! Error handling for Tubegrab

use thiserror::Error;

/// Substring yt-dlp prints when a merge was requested but ffmpeg is absent.
pub const MERGE_TOOL_MISSING_MARKER: &str = "ffmpeg is not installed";

/// Main error type for Tubegrab
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please enter a video URL")]
    EmptyUrl,

    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    #[error("Failed to extract video info: {0}")]
    ExtractionError(String),

    #[error("Failed to load thumbnail: {0}")]
    ThumbnailError(String),

    /// Carries yt-dlp's own message, which contains [`MERGE_TOOL_MISSING_MARKER`].
    #[error("{0}")]
    MergeToolMissing(String),

    #[error("{0}")]
    DownloadError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),
}

impl AppError {
    /// Classify a failed yt-dlp download from its stderr output.
    pub fn from_download_failure(stderr: &str) -> Self {
        let message = stderr.trim().to_string();
        if is_merge_tool_missing(&message) {
            AppError::MergeToolMissing(message)
        } else {
            AppError::DownloadError(message)
        }
    }
}

/// Whether an error message reports the missing merge tool.
pub fn is_merge_tool_missing(message: &str) -> bool {
    message.contains(MERGE_TOOL_MISSING_MARKER)
}
