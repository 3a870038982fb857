//! Exit codes for the CLI

use nexjax_core::NexjaxError;

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error (package.json missing or unreadable)
pub const CONFIG_ERROR: i32 = 2;

/// Native project layout error (ios dir, .xcodeproj, project.pbxproj)
pub const PROJECT_ERROR: i32 = 3;

/// Map a failed run to its exit code
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<NexjaxError>() {
        Some(NexjaxError::Config(_)) => CONFIG_ERROR,
        Some(NexjaxError::Project(_)) => PROJECT_ERROR,
        _ => ERROR,
    }
}
