//! Project root discovery

use std::path::{Path, PathBuf};

use tracing::debug;

use nexjax_core::config::defaults::{IOS_DIR, PACKAGE_DESCRIPTOR_FILE};

/// Walk up from `start` to the first directory holding both `package.json`
/// and `ios`. Falls back to `start` when none is found.
pub fn find_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(PACKAGE_DESCRIPTOR_FILE).exists() && dir.join(IOS_DIR).exists() {
            debug!(root = %dir.display(), "found project root");
            return dir.to_path_buf();
        }
    }

    debug!(start = %start.display(), "no project root found, using start directory");
    start.to_path_buf()
}
