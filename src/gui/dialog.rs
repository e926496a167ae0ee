//! Native dialogs (rfd)

use crate::session::{Notice, NoticeLevel};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Show a modal message box for `notice`
pub fn show_notice(notice: &Notice) {
    let level = match notice.level {
        NoticeLevel::Info => {
            info!("{}: {}", notice.title, notice.body);
            MessageLevel::Info
        }
        NoticeLevel::Error => {
            warn!("{}: {}", notice.title, notice.body);
            MessageLevel::Error
        }
    };

    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(notice.title.as_str())
        .set_description(notice.body.as_str())
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Native folder picker starting at `current`; `None` when cancelled
pub fn pick_folder(current: &Path) -> Option<PathBuf> {
    let mut dialog = FileDialog::new().set_title("Choose download folder");
    if current.is_dir() {
        dialog = dialog.set_directory(current);
    }
    dialog.pick_folder()
}
