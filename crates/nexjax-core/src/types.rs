//! Shared types

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::defaults::{
    DEFAULT_BUILD_NUMBER, DEFAULT_BUNDLE_IDENTIFIER, DEFAULT_DISPLAY_NAME, DEFAULT_IPHONE_ONLY,
    DEFAULT_VERSION,
};

/// Fully resolved iOS settings for one run.
///
/// This is also the on-disk shape of `ios.config.json`. The two maps are
/// omitted from the file when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosConfig {
    /// Apple development team; empty means unset
    pub team_id: String,

    /// Bundle identifier (not validated)
    pub bundle_identifier: String,

    /// Marketing version, `CFBundleShortVersionString`
    pub version: String,

    /// `CFBundleDisplayName`
    pub display_name: String,

    /// `CFBundleVersion`
    pub build_number: String,

    /// Strip iPad orientations from Info.plist
    pub iphone_only: bool,

    /// Permission strings, conventionally `*UsageDescription` keys
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub permissions: BTreeMap<String, String>,

    /// Arbitrary boolean Info.plist entries
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub info_plist: BTreeMap<String, bool>,
}

impl Default for IosConfig {
    fn default() -> Self {
        Self {
            team_id: String::new(),
            bundle_identifier: DEFAULT_BUNDLE_IDENTIFIER.to_string(),
            version: DEFAULT_VERSION.to_string(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            build_number: DEFAULT_BUILD_NUMBER.to_string(),
            iphone_only: DEFAULT_IPHONE_ONLY,
            permissions: BTreeMap::new(),
            info_plist: BTreeMap::new(),
        }
    }
}

impl IosConfig {
    /// Whether a team identifier is configured
    pub fn has_team_id(&self) -> bool {
        !self.team_id.is_empty()
    }
}

/// Kind of JavaScript project the native iOS folder belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectKind {
    /// `app.json` with an `expo` section
    Expo,
    /// Plain React Native, settings come from package.json
    BareReactNative,
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expo => write!(f, "Expo"),
            Self::BareReactNative => write!(f, "bare React Native"),
        }
    }
}
