//! Utility modules for error handling and configuration

pub mod config;
pub mod error;
pub mod platform;

// Re-export for convenience
pub use config::AppSettings;
pub use error::{is_merge_tool_missing, AppError, MERGE_TOOL_MISSING_MARKER};
pub use platform::{default_download_dir, ffmpeg_available};
