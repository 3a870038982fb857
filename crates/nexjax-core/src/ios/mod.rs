//! Native iOS project patching
//!
//! - [`project`]: `DEVELOPMENT_TEAM` in the Xcode project descriptor
//! - [`plist`]: version, names, orientations and extra keys in Info.plist

pub mod plist;
pub mod project;

pub use plist::{configure_info_plist, find_info_plist, ManifestChange, ManifestPatch};
pub use project::{configure_team_id, find_xcode_project, TeamIdPatch};
