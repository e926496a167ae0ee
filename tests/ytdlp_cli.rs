//! Drives `YtDlpExtractor` against small shell scripts standing in for yt-dlp.
#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tubegrab::downloader::{DownloadOptions, DownloadProgress, DownloadRequest, ProgressHook};
use tubegrab::extractor::{Extractor, VideoInfo, YtDlpExtractor};
use tubegrab::utils::AppError;

const VIDEO_JSON: &str = r#"{"id":"abc","title":"Fake Clip","thumbnail":"https://example.com/t.jpg","formats":[{"format_id":"18","height":360,"fps":25,"vcodec":"avc1","acodec":"mp4a"},{"format_id":"137","height":1080,"fps":30,"vcodec":"avc1","acodec":"none"},{"format_id":"140","vcodec":"none","acodec":"mp4a"}]}"#;

/// Write an executable script that records its arguments next to itself
fn fake_ytdlp(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("yt-dlp");
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"{}\"\n{}\n",
        dir.join("args.txt").display(),
        body
    );
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn recorded_args(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("args.txt"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn request(dir: &TempDir) -> DownloadRequest {
    DownloadRequest {
        url: "https://example.com/watch?v=abc".to_string(),
        max_height: 720,
        output_dir: dir.path().join("out"),
    }
}

#[derive(Default)]
struct RecordingHook {
    updates: Mutex<Vec<DownloadProgress>>,
}

impl ProgressHook for RecordingHook {
    fn on_progress(&self, progress: &DownloadProgress) {
        self.updates.lock().unwrap().push(progress.clone());
    }
}

#[tokio::test]
async fn extract_info_parses_dump_json() {
    let dir = tempfile::tempdir().unwrap();
    let ytdlp = fake_ytdlp(dir.path(), &format!("cat <<'EOF'\n{}\nEOF", VIDEO_JSON));
    let extractor = YtDlpExtractor::new(ytdlp);

    let raw = extractor
        .extract_info("https://example.com/watch?v=abc")
        .await
        .unwrap();
    let info = VideoInfo::from(raw);

    assert_eq!(info.title, "Fake Clip");
    assert_eq!(info.resolution_labels(), vec!["1080p", "360p"]);

    let args = recorded_args(dir.path());
    assert!(args.contains(&"--dump-json".to_string()));
    assert!(args.contains(&"--no-download".to_string()));
    assert_eq!(args.last().map(String::as_str), Some("https://example.com/watch?v=abc"));
}

#[tokio::test]
async fn extract_info_failure_carries_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let ytdlp = fake_ytdlp(
        dir.path(),
        "echo 'ERROR: Unsupported URL: https://example.com/nope' >&2\nexit 1",
    );
    let extractor = YtDlpExtractor::new(ytdlp);

    let err = extractor.extract_info("https://example.com/nope").await.unwrap_err();
    match err.downcast_ref::<AppError>() {
        Some(AppError::ExtractionError(msg)) => {
            assert_eq!(msg, "ERROR: Unsupported URL: https://example.com/nope")
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn extract_info_rejects_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let ytdlp = fake_ytdlp(dir.path(), "echo 'not json'");
    let extractor = YtDlpExtractor::new(ytdlp);

    let err = extractor.extract_info("https://example.com/v").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AppError>(),
        Some(AppError::SerializationError(_))
    ));
}

#[tokio::test]
async fn download_passes_options_and_reports_progress() {
    let dir = tempfile::tempdir().unwrap();
    let ytdlp = fake_ytdlp(
        dir.path(),
        "echo '[youtube] abc: Downloading webpage'\n\
         echo '[download]  10.0% of   5.00MiB at  1.00MiB/s ETA 00:04'\n\
         echo '[download]  60.5% of   5.00MiB at  2.00MiB/s ETA 00:01'\n\
         echo '[download] 100% of   5.00MiB in 00:00:03 at 1.60MiB/s'\n\
         echo '[Merger] Merging formats into \"out/Fake Clip.mp4\"'",
    );
    let extractor = YtDlpExtractor::new(ytdlp);
    let hook = Arc::new(RecordingHook::default());
    let options = DownloadOptions::for_request(&request(&dir), "mp4").with_progress(hook.clone());

    extractor
        .download("https://example.com/watch?v=abc", &options)
        .await
        .unwrap();

    let percents: Vec<f32> = hook.updates.lock().unwrap().iter().map(|p| p.percent).collect();
    assert_eq!(percents, vec![10.0, 60.5, 100.0]);

    let args = recorded_args(dir.path());
    let value_after = |flag: &str| {
        let i = args.iter().position(|a| a == flag).unwrap();
        args[i + 1].clone()
    };
    assert_eq!(value_after("-f"), "bestvideo[height<=720]+bestaudio/best[height<=720]");
    assert_eq!(
        PathBuf::from(value_after("-o")),
        dir.path().join("out").join("%(title)s.%(ext)s")
    );
    assert_eq!(value_after("--merge-output-format"), "mp4");
    assert!(args.contains(&"--newline".to_string()));
}

#[tokio::test]
async fn non_utf8_output_does_not_abort_download() {
    let dir = tempfile::tempdir().unwrap();
    // A Latin-1 title as printed by a non-UTF-8 console
    let ytdlp = fake_ytdlp(
        dir.path(),
        "printf '[download] Destination: caf\\351.mp4\\n'\n\
         echo '[download]  50.0% of   2.00MiB at  1.00MiB/s ETA 00:01'\n\
         echo '[download] 100% of   2.00MiB in 00:00:02 at 1.00MiB/s'\n\
         touch \"$(dirname \"$0\")/finished\"",
    );
    let extractor = YtDlpExtractor::new(ytdlp);
    let hook = Arc::new(RecordingHook::default());
    let options = DownloadOptions::for_request(&request(&dir), "mp4").with_progress(hook.clone());

    extractor
        .download("https://example.com/watch?v=abc", &options)
        .await
        .unwrap();

    // yt-dlp ran to the end instead of being killed
    assert!(dir.path().join("finished").exists());
    let percents: Vec<f32> = hook.updates.lock().unwrap().iter().map(|p| p.percent).collect();
    assert_eq!(percents, vec![50.0, 100.0]);
}

#[tokio::test]
async fn download_without_ffmpeg_is_classified() {
    let dir = tempfile::tempdir().unwrap();
    let ytdlp = fake_ytdlp(
        dir.path(),
        "echo 'ERROR: You have requested merging of multiple formats but ffmpeg is not installed. Aborting due to --abort-on-error' >&2\nexit 1",
    );
    let extractor = YtDlpExtractor::new(ytdlp);
    let options = DownloadOptions::for_request(&request(&dir), "mp4");

    let err = extractor
        .download("https://example.com/watch?v=abc", &options)
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AppError>(),
        Some(AppError::MergeToolMissing(_))
    ));
}

#[tokio::test]
async fn silent_failure_reports_exit_status() {
    let dir = tempfile::tempdir().unwrap();
    let ytdlp = fake_ytdlp(dir.path(), "exit 2");
    let extractor = YtDlpExtractor::new(ytdlp);
    let options = DownloadOptions::for_request(&request(&dir), "mp4");

    let err = extractor
        .download("https://example.com/watch?v=abc", &options)
        .await
        .unwrap_err();
    match err.downcast_ref::<AppError>() {
        Some(AppError::DownloadError(msg)) => assert!(msg.starts_with("yt-dlp exited with")),
        other => panic!("unexpected error: {:?}", other),
    }
}
