//! nexjax core - keeps a React Native iOS project in sync with its app config
//!
//! Resolves one canonical [`IosConfig`] from `ios.config.json`, `app.json` and
//! `package.json`, then patches the Xcode project descriptor and Info.plist in
//! place without reformatting them.

pub mod config;
pub mod error;
pub mod ios;
pub mod types;
pub mod workflow;

pub use config::{ConfigResolver, ConfigStore};
pub use error::{ConfigError, NexjaxError, ProjectError, Result};
pub use ios::{ManifestChange, ManifestPatch, TeamIdPatch};
pub use types::{IosConfig, ProjectKind};
pub use workflow::{ConfigureOptions, ConfigureWorkflow, ManifestOutcome, SyncReport};
