//! Info.plist patching
//!
//! Edits are surgical pattern replacements on the XML text rather than a
//! parse/serialize round trip, so untouched entries, comments and indentation
//! survive unchanged. Every step is idempotent: applying the same config twice
//! yields the same bytes as applying it once.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use crate::error::Result;
use crate::types::IosConfig;

/// Manifest file name
pub const INFO_PLIST: &str = "Info.plist";

pub const KEY_SHORT_VERSION: &str = "CFBundleShortVersionString";
pub const KEY_BUNDLE_VERSION: &str = "CFBundleVersion";
pub const KEY_DISPLAY_NAME: &str = "CFBundleDisplayName";
pub const KEY_IPAD_ORIENTATIONS: &str = "UISupportedInterfaceOrientations~ipad";

/// Closing tag of the top-level dictionary; new entries go right before the last one
const DICT_CLOSE: &str = "</dict>";

/// Indentation used for entries we write
const INDENT: &str = "    ";

/// The iPad orientation array including trailing whitespace
static IPAD_ORIENTATIONS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?s)<key>{}</key>\s*<array>.*?</array>\s*",
        regex::escape(KEY_IPAD_ORIENTATIONS)
    ))
    .expect("Invalid regex")
});

/// One effective edit to the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum ManifestChange {
    Version,
    BuildNumber,
    DisplayName,
    IpadOrientationsRemoved,
    Boolean { key: String, value: bool },
    Permission { key: String },
}

/// Result of patching one Info.plist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestPatch {
    /// Patched file
    pub path: PathBuf,
    /// Edits that changed the content; empty when the file was left alone
    pub changes: Vec<ManifestChange>,
}

impl ManifestPatch {
    /// Whether the file was rewritten
    pub fn modified(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Locate the app's Info.plist under `ios_dir`.
///
/// Checks `<ios_dir>/Info.plist` and `<ios_dir>/<dir name>/Info.plist` first,
/// then walks the tree depth-first in name order, skipping dot-directories.
pub fn find_info_plist(ios_dir: &Path) -> Option<PathBuf> {
    let mut candidates = vec![ios_dir.join(INFO_PLIST)];
    if let Some(name) = ios_dir.file_name() {
        candidates.push(ios_dir.join(name).join(INFO_PLIST));
    }

    if let Some(found) = candidates.into_iter().find(|p| p.is_file()) {
        debug!(path = %found.display(), "found Info.plist at common location");
        return Some(found);
    }

    let found = WalkDir::new(ios_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !(entry.file_type().is_dir()
                    && entry.file_name().to_string_lossy().starts_with('.'))
        })
        .flatten()
        .find(|entry| entry.file_type().is_file() && entry.file_name() == INFO_PLIST)
        .map(|entry| entry.into_path());

    match &found {
        Some(path) => debug!(path = %path.display(), "found Info.plist by search"),
        None => debug!(dir = %ios_dir.display(), "no Info.plist found"),
    }
    found
}

/// Apply every configured edit to the Info.plist text.
///
/// Returns the new text and the list of edits that actually changed it.
pub fn apply_config(content: &str, config: &IosConfig) -> Result<(String, Vec<ManifestChange>)> {
    let mut text = content.to_string();
    let mut changes = Vec::new();

    let known_strings = [
        (KEY_SHORT_VERSION, &config.version, ManifestChange::Version),
        (KEY_BUNDLE_VERSION, &config.build_number, ManifestChange::BuildNumber),
        (KEY_DISPLAY_NAME, &config.display_name, ManifestChange::DisplayName),
    ];
    for (key, value, change) in known_strings {
        if value.is_empty() {
            continue;
        }
        // Only updated in place; these keys come from the project template
        if let Some(patched) = replace_string_entry(&text, key, value)? {
            record(&mut text, patched, change, &mut changes);
        }
    }

    if config.iphone_only {
        let patched = IPAD_ORIENTATIONS_REGEX.replace(&text, "").into_owned();
        record(&mut text, patched, ManifestChange::IpadOrientationsRemoved, &mut changes);
    }

    for (key, value) in &config.info_plist {
        let patched = match replace_bool_entry(&text, key, *value)? {
            Some(patched) => patched,
            None => insert_entry(&text, key, bool_tag(*value)),
        };
        let change = ManifestChange::Boolean {
            key: key.clone(),
            value: *value,
        };
        record(&mut text, patched, change, &mut changes);
    }

    for (key, value) in &config.permissions {
        if value.is_empty() {
            continue;
        }
        let patched = match replace_string_entry(&text, key, value)? {
            Some(patched) => patched,
            None => insert_entry(&text, key, &string_tag(value)),
        };
        let change = ManifestChange::Permission { key: key.clone() };
        record(&mut text, patched, change, &mut changes);
    }

    Ok((text, changes))
}

/// Patch the Info.plist at `path`, writing it back only if something changed
#[instrument(skip(config), fields(path = %path.display()))]
pub fn configure_info_plist(path: &Path, config: &IosConfig) -> Result<ManifestPatch> {
    let content = std::fs::read_to_string(path)?;
    let (patched, changes) = apply_config(&content, config)?;

    if patched != content {
        std::fs::write(path, patched)?;
        info!(changes = changes.len(), "updated Info.plist");
    } else {
        debug!("Info.plist already up to date");
    }

    Ok(ManifestPatch {
        path: path.to_path_buf(),
        changes,
    })
}

fn record(text: &mut String, patched: String, change: ManifestChange, changes: &mut Vec<ManifestChange>) {
    if patched != *text {
        *text = patched;
        changes.push(change);
    }
}

/// Replace the first `<key>K</key><string>…</string>` pair, if present
fn replace_string_entry(text: &str, key: &str, value: &str) -> Result<Option<String>> {
    let pattern = Regex::new(&format!(
        r"<key>{}</key>\s*<string>[^<]*</string>",
        regex::escape(key)
    ))?;
    if !pattern.is_match(text) {
        return Ok(None);
    }

    let entry = format!("<key>{}</key>\n{}{}", key, INDENT, string_tag(value));
    Ok(Some(pattern.replace(text, NoExpand(&entry)).into_owned()))
}

/// Replace the first `<key>K</key><true/>|<false/>` pair, if present
fn replace_bool_entry(text: &str, key: &str, value: bool) -> Result<Option<String>> {
    let pattern = Regex::new(&format!(
        r"<key>{}</key>\s*<(true|false)\s*/>",
        regex::escape(key)
    ))?;
    if !pattern.is_match(text) {
        return Ok(None);
    }

    let entry = format!("<key>{}</key>\n{}{}", key, INDENT, bool_tag(value));
    Ok(Some(pattern.replace(text, NoExpand(&entry)).into_owned()))
}

/// Insert a new key/value pair before the last `</dict>`
fn insert_entry(text: &str, key: &str, value_tag: &str) -> String {
    let Some(index) = text.rfind(DICT_CLOSE) else {
        warn!(key, "no closing </dict> in Info.plist, cannot add entry");
        return text.to_string();
    };

    let (before, after) = text.split_at(index);
    format!(
        "{before}{INDENT}<key>{key}</key>\n{INDENT}{value_tag}\n{after}"
    )
}

fn bool_tag(value: bool) -> &'static str {
    if value {
        "<true/>"
    } else {
        "<false/>"
    }
}

fn string_tag(value: &str) -> String {
    format!("<string>{}</string>", escape_xml(value))
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
