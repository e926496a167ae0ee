//! yt-dlp format selection

/// Best video stream at or below `max_height` merged with the best audio
/// stream, else the best single file at or below `max_height`.
pub fn format_expression(max_height: u32) -> String {
    format!(
        "bestvideo[height<={h}]+bestaudio/best[height<={h}]",
        h = max_height
    )
}

/// yt-dlp output template placing `<title>.<ext>` in `dir`
pub fn output_template(dir: &std::path::Path) -> String {
    dir.join("%(title)s.%(ext)s").to_string_lossy().into_owned()
}
