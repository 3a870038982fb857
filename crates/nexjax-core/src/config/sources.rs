//! Read-only input descriptors: package.json and app.json

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{ConfigError, Result};
use crate::types::ProjectKind;

use super::defaults::{APP_DESCRIPTOR_FILE, PACKAGE_DESCRIPTOR_FILE};

/// The fields of package.json that feed resolution
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageJson {
    /// Package name
    #[serde(default)]
    pub name: Option<String>,

    /// Package version
    #[serde(default)]
    pub version: Option<String>,
}

impl PackageJson {
    /// Load package.json from the project root.
    ///
    /// Missing file is `ConfigError::NotFound`; unparseable content is fatal
    /// too since there is nothing lower to fall back to.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(PACKAGE_DESCRIPTOR_FILE);
        if !path.is_file() {
            return Err(ConfigError::NotFound(path).into());
        }

        let content = std::fs::read_to_string(&path)?;
        let pkg = serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), "loaded package descriptor");
        Ok(pkg)
    }

    /// Package name, if non-empty
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    /// Package version, if non-empty
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref().filter(|s| !s.is_empty())
    }
}

/// Expo app descriptor, kept as raw JSON since `infoPlist` is free-form
#[derive(Debug, Clone)]
pub struct AppJson {
    raw: Value,
}

impl AppJson {
    /// Load app.json if present and valid; anything else is treated as absent
    pub fn load(root: &Path) -> Option<Self> {
        let path = root.join(APP_DESCRIPTOR_FILE);
        if !path.is_file() {
            return None;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read app descriptor, ignoring");
                return None;
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(raw) => {
                debug!(path = %path.display(), "loaded app descriptor");
                Some(Self { raw })
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid app descriptor, ignoring");
                None
            }
        }
    }

    /// Wrap an already parsed document
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    fn expo(&self) -> Option<&Value> {
        self.raw.get("expo").filter(|v| v.is_object())
    }

    fn ios(&self) -> Option<&Value> {
        self.expo().and_then(|e| e.get("ios"))
    }

    /// Whether this descriptor has an `expo` section
    pub fn is_expo(&self) -> bool {
        self.expo().is_some()
    }

    /// `expo.ios.bundleIdentifier`
    pub fn bundle_identifier(&self) -> Option<String> {
        text_value(self.ios().and_then(|i| i.get("bundleIdentifier")))
    }

    /// `expo.version`
    pub fn version(&self) -> Option<String> {
        text_value(self.expo().and_then(|e| e.get("version")))
    }

    /// `expo.name`
    pub fn name(&self) -> Option<String> {
        text_value(self.expo().and_then(|e| e.get("name")))
    }

    /// `expo.ios.buildNumber`
    pub fn build_number(&self) -> Option<String> {
        text_value(self.ios().and_then(|i| i.get("buildNumber")))
    }

    /// `expo.ios.supportsTablet`, only when explicitly set to a boolean
    pub fn supports_tablet(&self) -> Option<bool> {
        self.ios()
            .and_then(|i| i.get("supportsTablet"))
            .and_then(Value::as_bool)
    }

    /// `expo.ios.infoPlist`
    pub fn info_plist(&self) -> Option<&Map<String, Value>> {
        self.ios()
            .and_then(|i| i.get("infoPlist"))
            .and_then(Value::as_object)
    }
}

/// Detect whether the project at `root` is an Expo or bare React Native project
pub fn detect_project_kind(root: &Path) -> ProjectKind {
    match AppJson::load(root) {
        Some(app) if app.is_expo() => ProjectKind::Expo,
        _ => ProjectKind::BareReactNative,
    }
}

/// A usable text value: a non-empty string, or a number rendered as text.
///
/// Empty strings count as unset so that lower-precedence sources apply.
pub(crate) fn text_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_package_json_missing() {
        let temp = TempDir::new().unwrap();
        let err = PackageJson::load(temp.path()).unwrap_err();
        assert!(matches!(
            err,
            crate::NexjaxError::Config(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_package_json_invalid_is_fatal() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("package.json"), "{ not json").unwrap();

        let err = PackageJson::load(temp.path()).unwrap_err();
        assert!(matches!(
            err,
            crate::NexjaxError::Config(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_package_json_fields() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("package.json"),
            r#"{"name": "myapp", "version": "", "private": true}"#,
        )
        .unwrap();

        let pkg = PackageJson::load(temp.path()).unwrap();
        assert_eq!(pkg.name(), Some("myapp"));
        assert_eq!(pkg.version(), None);
    }

    #[test]
    fn test_app_json_invalid_is_absent() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("app.json"), "{\"expo\": ").unwrap();

        assert!(AppJson::load(temp.path()).is_none());
        assert_eq!(detect_project_kind(temp.path()), ProjectKind::BareReactNative);
    }

    #[test]
    fn test_app_json_accessors() {
        let app = AppJson::from_value(json!({
            "expo": {
                "name": "Test App",
                "version": "1.2.3",
                "ios": {
                    "bundleIdentifier": "com.example.testapp",
                    "buildNumber": 42,
                    "supportsTablet": false,
                    "infoPlist": { "NSCameraUsageDescription": "Scan codes" }
                }
            }
        }));

        assert!(app.is_expo());
        assert_eq!(app.name().as_deref(), Some("Test App"));
        assert_eq!(app.version().as_deref(), Some("1.2.3"));
        assert_eq!(app.bundle_identifier().as_deref(), Some("com.example.testapp"));
        assert_eq!(app.build_number().as_deref(), Some("42"));
        assert_eq!(app.supports_tablet(), Some(false));
        assert_eq!(app.info_plist().map(|m| m.len()), Some(1));
    }

    #[test]
    fn test_app_json_without_expo_section() {
        let app = AppJson::from_value(json!({"name": "x", "ios": {"supportsTablet": true}}));

        assert!(!app.is_expo());
        assert_eq!(app.supports_tablet(), None);
        assert!(app.info_plist().is_none());
    }

    #[test]
    fn test_detect_expo_project() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("app.json"), r#"{"expo": {"name": "A"}}"#).unwrap();

        assert_eq!(detect_project_kind(temp.path()), ProjectKind::Expo);
    }
}
