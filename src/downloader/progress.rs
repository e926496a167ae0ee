//! Progress reporting for downloads
//!
//! yt-dlp is run with `--newline`, so each progress update arrives as its own
//! line on stdout:
//!
//! ```text
//! [download]  42.5% of ~ 10.00MiB at  1.20MiB/s ETA 00:07 (frag 3/9)
//! [download] 100% of   10.00MiB in 00:00:03 at 3.10MiB/s
//! ```

use tracing::info;

/// One parsed progress line
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadProgress {
    /// 0.0 to 100.0
    pub percent: f32,
    pub total_size: Option<String>,
    pub speed: Option<String>,
    pub eta: Option<String>,
}

impl DownloadProgress {
    pub fn is_finished(&self) -> bool {
        self.percent >= 100.0
    }
}

/// Receives progress updates while a download runs.
///
/// Called from the task driving yt-dlp, never from the UI thread.
pub trait ProgressHook: Send + Sync {
    fn on_progress(&self, progress: &DownloadProgress);
}

/// Ignores every update
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressHook for NoopProgress {
    fn on_progress(&self, _progress: &DownloadProgress) {}
}

/// Logs updates, one line per whole percent
#[derive(Debug, Default)]
pub struct LogProgress {
    last_percent: std::sync::Mutex<Option<u32>>,
}

impl ProgressHook for LogProgress {
    fn on_progress(&self, progress: &DownloadProgress) {
        let whole = progress.percent.floor() as u32;
        if let Ok(mut last) = self.last_percent.lock() {
            if *last == Some(whole) {
                return;
            }
            *last = Some(whole);
        }
        info!(
            "Progress: {:.1}% of {} at {} (ETA {})",
            progress.percent,
            progress.total_size.as_deref().unwrap_or("?"),
            progress.speed.as_deref().unwrap_or("?"),
            progress.eta.as_deref().unwrap_or("?"),
        );
    }
}

/// Parse a yt-dlp `[download]` progress line; other lines yield `None`.
pub fn parse_progress_line(line: &str) -> Option<DownloadProgress> {
    let rest = line.trim().strip_prefix("[download]")?;
    let mut tokens = rest.split_whitespace().peekable();

    let percent: f32 = tokens.next()?.strip_suffix('%')?.parse().ok()?;

    let mut progress = DownloadProgress {
        percent,
        total_size: None,
        speed: None,
        eta: None,
    };

    while let Some(token) = tokens.next() {
        match token {
            "of" => {
                if tokens.peek() == Some(&"~") {
                    tokens.next();
                }
                progress.total_size = tokens.next().map(str::to_string);
            }
            "at" => progress.speed = tokens.next().map(str::to_string),
            "ETA" => progress.eta = tokens.next().map(str::to_string),
            _ => {}
        }
    }

    Some(progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_in_progress_line() {
        let line = "[download]  42.5% of   10.00MiB at    1.20MiB/s ETA 00:07";
        let p = parse_progress_line(line).unwrap();
        assert_eq!(p.percent, 42.5);
        assert_eq!(p.total_size.as_deref(), Some("10.00MiB"));
        assert_eq!(p.speed.as_deref(), Some("1.20MiB/s"));
        assert_eq!(p.eta.as_deref(), Some("00:07"));
        assert!(!p.is_finished());
    }

    #[test]
    fn test_parse_estimated_size_with_fragments() {
        let line = "[download]   3.0% of ~ 120.50MiB at  2.00MiB/s ETA 01:02 (frag 3/90)";
        let p = parse_progress_line(line).unwrap();
        assert_eq!(p.percent, 3.0);
        assert_eq!(p.total_size.as_deref(), Some("120.50MiB"));
        assert_eq!(p.eta.as_deref(), Some("01:02"));
    }

    #[test]
    fn test_parse_finished_line() {
        let line = "[download] 100% of   10.00MiB in 00:00:03 at 3.10MiB/s";
        let p = parse_progress_line(line).unwrap();
        assert!(p.is_finished());
        assert_eq!(p.speed.as_deref(), Some("3.10MiB/s"));
        assert_eq!(p.eta, None);
    }

    #[test]
    fn test_ignores_other_lines() {
        assert!(parse_progress_line("[youtube] abc123: Downloading webpage").is_none());
        assert!(parse_progress_line("[download] Destination: /tmp/video.f137.mp4").is_none());
        assert!(parse_progress_line("[Merger] Merging formats into \"/tmp/video.mp4\"").is_none());
        assert!(parse_progress_line("").is_none());
    }

    #[test]
    fn test_log_progress_accepts_updates() {
        let hook = LogProgress::default();
        let p = parse_progress_line("[download]  50.0% of 1.00MiB at 1.00MiB/s ETA 00:01").unwrap();
        hook.on_progress(&p);
        hook.on_progress(&p);
        assert_eq!(*hook.last_percent.lock().unwrap(), Some(50));
    }
}
