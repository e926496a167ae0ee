//! Platform-specific utilities for Tubegrab
//!
//! This module provides cross-platform abstractions for:
//! - The default download directory
//! - Locating external tools (yt-dlp, ffmpeg)

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Returns the default download directory
/// - All platforms: the user's Downloads folder, falling back to ~/Downloads
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| {
            warn!("Could not determine Downloads directory, using current directory");
            PathBuf::from(".")
        })
}

/// Platform-specific executable name
pub fn exe_name(base: &str) -> String {
    if cfg!(target_os = "windows") {
        format!("{}.exe", base)
    } else {
        base.to_string()
    }
}

/// Returns the path to a tool shipped next to our own executable, if any
pub fn adjacent_tool(base: &str) -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let exe_dir = exe_path.parent()?;

    let adjacent = exe_dir.join(exe_name(base));
    if adjacent.exists() && is_executable(&adjacent) {
        return Some(adjacent);
    }

    // macOS bundle structure
    // App.app/Contents/MacOS/tubegrab
    // App.app/Contents/Resources/bin/<tool>
    if exe_dir.ends_with("MacOS") {
        let bundled = exe_dir.parent()?.join("Resources").join("bin").join(base);
        if bundled.exists() && is_executable(&bundled) {
            return Some(bundled);
        }
    }

    None
}

/// Whether ffmpeg can be found; yt-dlp needs it to merge separate streams
pub fn ffmpeg_available() -> bool {
    if adjacent_tool("ffmpeg").is_some() {
        return true;
    }
    match which::which("ffmpeg") {
        Ok(path) => {
            debug!("ffmpeg found at {}", path.display());
            true
        }
        Err(_) => false,
    }
}

/// Check if a file is executable
pub fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        match std::fs::metadata(path) {
            Ok(metadata) => metadata.is_file() && metadata.permissions().mode() & 0o111 != 0,
            Err(_) => false,
        }
    }

    #[cfg(not(unix))]
    {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_dir_not_empty() {
        let dir = default_download_dir();
        assert!(!dir.as_os_str().is_empty());
    }

    #[test]
    fn test_exe_name() {
        let name = exe_name("yt-dlp");
        #[cfg(target_os = "windows")]
        assert_eq!(name, "yt-dlp.exe");
        #[cfg(not(target_os = "windows"))]
        assert_eq!(name, "yt-dlp");
    }

    #[cfg(unix)]
    #[test]
    fn test_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("tool");
        std::fs::write(&script, "#!/bin/sh\n").unwrap();
        assert!(!is_executable(&script));

        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert!(is_executable(&script));

        // Directories are never tools
        assert!(!is_executable(dir.path()));
    }
}
