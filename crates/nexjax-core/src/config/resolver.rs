//! Precedence merge of override file, app.json and package.json

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::types::IosConfig;

use super::defaults::{
    DEFAULT_BUILD_NUMBER, DEFAULT_BUNDLE_IDENTIFIER, DEFAULT_DISPLAY_NAME, DEFAULT_IPHONE_ONLY,
    DEFAULT_VERSION, USAGE_DESCRIPTION_SUFFIX,
};
use super::sources::{AppJson, PackageJson};
use super::store::{ConfigStore, OverrideConfig};

/// Resolves and persists the canonical [`IosConfig`] for a project root
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    root: PathBuf,
    store: ConfigStore,
}

impl ConfigResolver {
    /// Resolver for the project at `root`
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            store: ConfigStore::new(root),
        }
    }

    /// The override store this resolver writes to
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Load all sources, merge them, and write the result back to the
    /// override file.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn resolve(&self) -> Result<IosConfig> {
        let overrides = self.store.load();
        let package = PackageJson::load(&self.root)?;
        let app = AppJson::load(&self.root);

        let config = merge(&overrides, app.as_ref(), &package);
        self.store.save(&config)?;

        info!(
            bundle_identifier = %config.bundle_identifier,
            version = %config.version,
            build_number = %config.build_number,
            "configuration resolved"
        );
        Ok(config)
    }
}

/// Merge the three sources, highest precedence first.
///
/// Scalars: override > app.json > package.json > default. Maps start from
/// app.json's `infoPlist` and are overlaid key by key with the override file.
pub fn merge(overrides: &OverrideConfig, app: Option<&AppJson>, package: &PackageJson) -> IosConfig {
    let from_app = |f: fn(&AppJson) -> Option<String>| app.and_then(f);

    let bundle_identifier = overrides
        .text("bundleIdentifier")
        .or_else(|| from_app(AppJson::bundle_identifier))
        .or_else(|| package.name().map(String::from))
        .unwrap_or_else(|| DEFAULT_BUNDLE_IDENTIFIER.to_string());

    let version = overrides
        .text("version")
        .or_else(|| from_app(AppJson::version))
        .or_else(|| package.version().map(String::from))
        .unwrap_or_else(|| DEFAULT_VERSION.to_string());

    let display_name = overrides
        .text("displayName")
        .or_else(|| from_app(AppJson::name))
        .or_else(|| package.name().map(String::from))
        .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());

    let build_number = overrides
        .text("buildNumber")
        .or_else(|| from_app(AppJson::build_number))
        .unwrap_or_else(|| DEFAULT_BUILD_NUMBER.to_string());

    let iphone_only = overrides
        .iphone_only()
        .or_else(|| app.and_then(AppJson::supports_tablet).map(|tablet| !tablet))
        .unwrap_or(DEFAULT_IPHONE_ONLY);

    let (mut permissions, mut info_plist) = app.map(extract_info_plist).unwrap_or_default();
    permissions.extend(overrides.permissions());
    info_plist.extend(overrides.info_plist_booleans());

    debug!(
        permissions = permissions.len(),
        booleans = info_plist.len(),
        "merged Info.plist entries"
    );

    IosConfig {
        team_id: overrides.text("teamId").unwrap_or_default(),
        bundle_identifier,
        version,
        display_name,
        build_number,
        iphone_only,
        permissions,
        info_plist,
    }
}

/// Split `expo.ios.infoPlist` into permission strings and boolean flags
fn extract_info_plist(app: &AppJson) -> (BTreeMap<String, String>, BTreeMap<String, bool>) {
    let mut permissions = BTreeMap::new();
    let mut booleans = BTreeMap::new();

    for (key, value) in app.info_plist().into_iter().flatten() {
        if let Some(text) = value.as_str() {
            if key.ends_with(USAGE_DESCRIPTION_SUFFIX) {
                permissions.insert(key.clone(), text.to_string());
            }
        } else if let Some(flag) = value.as_bool() {
            booleans.insert(key.clone(), flag);
        }
    }

    (permissions, booleans)
}
