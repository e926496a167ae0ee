pub mod models;
pub mod thumbnail;
pub mod traits;
pub mod ytdlp;

pub use models::{FormatEntry, RawFormat, RawVideoInfo, VideoInfo};
pub use thumbnail::{decode_thumbnail, fetch_thumbnail, Thumbnail};
pub use traits::Extractor;
pub use ytdlp::YtDlpExtractor;
