//! Configuration resolution for nexjax
//!
//! Three sources are merged, highest precedence first:
//!   1. `ios.config.json` (persisted overrides, rewritten on every run)
//!   2. `app.json` (Expo, optional)
//!   3. `package.json` (required)

pub mod defaults;
mod resolver;
mod sources;
mod store;

pub use resolver::*;
pub use sources::*;
pub use store::*;
