//! User-facing messages produced by session events

use crate::utils::error::{is_merge_tool_missing, AppError};

pub const DOWNLOAD_SUCCEEDED: &str = "Download completed successfully!";

pub const MERGE_TOOL_REMEDIATION: &str = "FFmpeg is required for merging audio/video streams.\n\n\
Please install FFmpeg or choose a format with built-in audio.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A message dialog the UI should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: &str, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.to_string(),
            body: body.into(),
        }
    }

    pub fn error(body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Error".to_string(),
            body: body.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    pub fn empty_url() -> Self {
        Self::error(AppError::EmptyUrl.to_string())
    }

    pub fn fetch_failed(message: &str) -> Self {
        Self::error(format!("Could not fetch video info: {}", message))
    }

    /// The merge-tool failure gets remediation text instead of the raw error
    pub fn download_failed(message: &str) -> Self {
        if is_merge_tool_missing(message) {
            Self::error(MERGE_TOOL_REMEDIATION)
        } else {
            Self::error(format!("Download failed: {}", message))
        }
    }

    pub fn download_succeeded() -> Self {
        Self::info("Success", DOWNLOAD_SUCCEEDED)
    }
}
