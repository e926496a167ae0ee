//! Tubegrab library

pub mod backend;
pub mod downloader;
pub mod extractor;
pub mod gui;
pub mod session;
pub mod utils;

// Re-export main types for easier use
pub use backend::{Backend, FetchedVideo};
pub use downloader::{DownloadOptions, DownloadProgress, DownloadRequest, ProgressHook};
pub use extractor::{Extractor, FormatEntry, VideoInfo, YtDlpExtractor};
pub use gui::{Message, TubegrabApp};
pub use session::{Notice, Session};
pub use utils::{AppError, AppSettings};
