//! Data structures for video information
//!
//! `RawVideoInfo`/`RawFormat` mirror the JSON yt-dlp prints for `--dump-json`.
//! `VideoInfo`/`FormatEntry` are the reduced view the UI works with.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Title shown when yt-dlp reports none
pub const UNTITLED: &str = "No Title Found";

/// Video metadata as reported by yt-dlp
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawVideoInfo {
    pub id: Option<String>,
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub webpage_url: Option<String>,
    pub extractor: Option<String>,
    #[serde(default)]
    pub formats: Vec<RawFormat>,
}

/// A single stream as reported by yt-dlp
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFormat {
    pub format_id: String,
    pub ext: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fps: Option<f64>,
    pub vcodec: Option<String>,
    pub acodec: Option<String>,
    pub format_note: Option<String>,
}

impl RawFormat {
    /// yt-dlp spells an absent codec as the literal string "none"
    pub fn has_video(&self) -> bool {
        self.vcodec.as_deref() != Some("none")
    }

    pub fn has_audio(&self) -> bool {
        self.acodec.as_deref() != Some("none")
    }
}

/// Video information shown in the UI; valid until the next fetch
#[derive(Debug, Clone, PartialEq)]
pub struct VideoInfo {
    pub title: String,
    pub thumbnail_url: String,
    pub formats: Vec<FormatEntry>,
}

/// A video-carrying stream offered by the source
#[derive(Debug, Clone, PartialEq)]
pub struct FormatEntry {
    pub format_id: String,
    pub height: Option<u32>,
    pub has_audio: bool,
    /// e.g. "1080p@30fps"
    pub display_label: String,
}

impl FormatEntry {
    pub fn from_raw(raw: &RawFormat) -> Self {
        // Some extractors report 0 for an unknown height
        let height = raw.height.filter(|h| *h > 0);
        let base = match height {
            Some(height) => resolution_label(height),
            None => raw.format_id.clone(),
        };
        let display_label = match raw.fps {
            Some(fps) if fps > 0.0 => format!("{}@{}fps", base, fps.trunc() as u32),
            _ => base,
        };

        Self {
            format_id: raw.format_id.clone(),
            height,
            has_audio: raw.has_audio(),
            display_label,
        }
    }
}

impl From<RawVideoInfo> for VideoInfo {
    fn from(raw: RawVideoInfo) -> Self {
        let formats = raw
            .formats
            .iter()
            .filter(|f| f.has_video())
            .map(FormatEntry::from_raw)
            .collect();

        Self {
            title: raw.title.unwrap_or_else(|| UNTITLED.to_string()),
            thumbnail_url: raw.thumbnail.unwrap_or_default(),
            formats,
        }
    }
}

impl VideoInfo {
    /// Distinct resolution labels, highest first
    pub fn resolution_labels(&self) -> Vec<String> {
        let heights: BTreeSet<u32> = self
            .formats
            .iter()
            .filter_map(|f| f.height)
            .filter(|h| *h > 0)
            .collect();
        heights.into_iter().rev().map(resolution_label).collect()
    }

    /// Entries that already carry audio and need no merge
    pub fn combined_formats(&self) -> impl Iterator<Item = &FormatEntry> {
        self.formats.iter().filter(|f| f.has_audio)
    }
}

/// "720" -> "720p"
pub fn resolution_label(height: u32) -> String {
    format!("{}p", height)
}

/// "720p" -> 720
pub fn parse_resolution_label(label: &str) -> Option<u32> {
    label.strip_suffix('p')?.parse().ok()
}
