//! UI-independent application state and event handling

pub mod notice;
pub mod state;

pub use notice::{Notice, NoticeLevel};
pub use state::Session;
