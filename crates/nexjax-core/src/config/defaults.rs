//! File names and fallback values used during resolution

/// Persisted override file, both input and output
pub const OVERRIDE_CONFIG_FILE: &str = "ios.config.json";

/// Platform app descriptor (Expo)
pub const APP_DESCRIPTOR_FILE: &str = "app.json";

/// Generic package descriptor, always required
pub const PACKAGE_DESCRIPTOR_FILE: &str = "package.json";

/// Directory holding the generated native iOS project
pub const IOS_DIR: &str = "ios";

/// Suffix that marks `infoPlist` string entries as permission strings
pub const USAGE_DESCRIPTION_SUFFIX: &str = "UsageDescription";

pub const DEFAULT_BUNDLE_IDENTIFIER: &str = "com.example.app";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_DISPLAY_NAME: &str = "MyApp";
pub const DEFAULT_BUILD_NUMBER: &str = "1";
pub const DEFAULT_IPHONE_ONLY: bool = true;
