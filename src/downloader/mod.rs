//! Download request and option types handed to the extractor

pub mod format;
pub mod progress;

pub use format::{format_expression, output_template};
pub use progress::{parse_progress_line, DownloadProgress, LogProgress, NoopProgress, ProgressHook};

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// What the user asked to download
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadRequest {
    pub url: String,
    pub max_height: u32,
    pub output_dir: PathBuf,
}

/// Options bundle passed to the extractor's download call
#[derive(Clone)]
pub struct DownloadOptions {
    /// yt-dlp `-f` expression
    pub format: String,
    /// yt-dlp `-o` template
    pub output_template: String,
    /// yt-dlp `--merge-output-format`
    pub merge_output_format: String,
    pub progress: Arc<dyn ProgressHook>,
}

impl DownloadOptions {
    pub fn for_request(request: &DownloadRequest, merge_output_format: &str) -> Self {
        Self {
            format: format_expression(request.max_height),
            output_template: output_template(&request.output_dir),
            merge_output_format: merge_output_format.to_string(),
            progress: Arc::new(NoopProgress),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressHook>) -> Self {
        self.progress = progress;
        self
    }
}

impl fmt::Debug for DownloadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadOptions")
            .field("format", &self.format)
            .field("output_template", &self.output_template)
            .field("merge_output_format", &self.merge_output_format)
            .finish_non_exhaustive()
    }
}
