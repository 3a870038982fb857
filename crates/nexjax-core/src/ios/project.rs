//! Xcode project descriptor (`project.pbxproj`) patching
//!
//! Only the `DEVELOPMENT_TEAM` build setting is touched; everything else in
//! the file is left byte-for-byte as Xcode wrote it.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::error::{ProjectError, Result};

/// Suffix of an Xcode project bundle directory
pub const XCODEPROJ_SUFFIX: &str = ".xcodeproj";

/// Descriptor file inside the project bundle
pub const PBXPROJ_FILE: &str = "project.pbxproj";

/// Any existing `DEVELOPMENT_TEAM =` assignment
static TEAM_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"DEVELOPMENT_TEAM\s*=").expect("Invalid regex"));

/// A full `DEVELOPMENT_TEAM = <value>;` statement
static TEAM_STATEMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"DEVELOPMENT_TEAM\s*=\s*[^;]+;").expect("Invalid regex"));

/// Opening of a `buildSettings = {` block
static BUILD_SETTINGS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"buildSettings\s*=\s*\{").expect("Invalid regex"));

/// Result of patching the team identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TeamIdPatch {
    /// No team identifier configured; file untouched
    Skipped,
    /// Existing assignments rewritten
    Replaced { count: usize },
    /// No assignment existed; one added to each build settings block
    Injected { count: usize },
}

impl TeamIdPatch {
    /// Whether the descriptor was rewritten
    pub fn modified(&self) -> bool {
        !matches!(self, Self::Skipped)
    }
}

/// Find the `.xcodeproj` bundle inside `ios_dir` and return its pbxproj path.
///
/// Entries are sorted by name and the first bundle wins, so the choice does not
/// depend on directory enumeration order.
pub fn find_xcode_project(ios_dir: &Path) -> Result<PathBuf> {
    let mut bundles: Vec<PathBuf> = std::fs::read_dir(ios_dir)?
        .flatten()
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(XCODEPROJ_SUFFIX))
        .map(|entry| entry.path())
        .collect();
    bundles.sort();

    let bundle = bundles
        .first()
        .ok_or_else(|| ProjectError::NotFound(ios_dir.to_path_buf()))?;

    if bundles.len() > 1 {
        warn!(
            chosen = %bundle.display(),
            candidates = bundles.len(),
            "multiple Xcode projects found, using the first"
        );
    }

    let project_file = bundle.join(PBXPROJ_FILE);
    debug!(path = %project_file.display(), "resolved Xcode project file");
    Ok(project_file)
}

/// Rewrite `DEVELOPMENT_TEAM` in the pbxproj text.
///
/// Existing statements get the new value; if there are none, a statement is
/// inserted at the top of every `buildSettings` block.
pub fn apply_team_id(content: &str, team_id: &str) -> (String, TeamIdPatch) {
    if team_id.is_empty() {
        return (content.to_string(), TeamIdPatch::Skipped);
    }

    if TEAM_KEY_REGEX.is_match(content) {
        let count = TEAM_STATEMENT_REGEX.find_iter(content).count();
        let statement = format!("DEVELOPMENT_TEAM = {};", team_id);
        let patched = TEAM_STATEMENT_REGEX.replace_all(content, NoExpand(&statement));
        (patched.into_owned(), TeamIdPatch::Replaced { count })
    } else {
        let count = BUILD_SETTINGS_REGEX.find_iter(content).count();
        let patched = BUILD_SETTINGS_REGEX.replace_all(content, |caps: &regex::Captures| {
            format!("{}\n\t\t\t\tDEVELOPMENT_TEAM = {};", &caps[0], team_id)
        });
        (patched.into_owned(), TeamIdPatch::Injected { count })
    }
}

/// Patch the team identifier in the pbxproj file at `project_file`
#[instrument(skip(team_id), fields(path = %project_file.display()))]
pub fn configure_team_id(project_file: &Path, team_id: &str) -> Result<TeamIdPatch> {
    if team_id.is_empty() {
        debug!("no team id configured, skipping");
        return Ok(TeamIdPatch::Skipped);
    }

    let content = std::fs::read_to_string(project_file)?;
    let (patched, outcome) = apply_team_id(&content, team_id);
    std::fs::write(project_file, patched)?;

    info!(team_id, outcome = ?outcome, "updated DEVELOPMENT_TEAM");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PBXPROJ_WITHOUT_TEAM: &str = r#"/* Begin XCBuildConfiguration section */
		13B07F941A680F5B00A75B9A /* Debug */ = {
			isa = XCBuildConfiguration;
			buildSettings = {
				CURRENT_PROJECT_VERSION = 1;
				PRODUCT_NAME = MyApp;
			};
			name = Debug;
		};
		13B07F951A680F5B00A75B9A /* Release */ = {
			isa = XCBuildConfiguration;
			buildSettings = {
				CURRENT_PROJECT_VERSION = 1;
				PRODUCT_NAME = MyApp;
			};
			name = Release;
		};
/* End XCBuildConfiguration section */
"#;

    fn setup_ios_dir(temp: &TempDir, bundles: &[&str]) -> PathBuf {
        let ios = temp.path().join("ios");
        for bundle in bundles {
            let dir = ios.join(bundle);
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join(PBXPROJ_FILE), PBXPROJ_WITHOUT_TEAM).unwrap();
        }
        std::fs::create_dir_all(&ios).unwrap();
        ios
    }

    #[test]
    fn test_find_xcode_project() {
        let temp = TempDir::new().unwrap();
        let ios = setup_ios_dir(&temp, &["MyApp.xcodeproj"]);
        std::fs::create_dir_all(ios.join("MyApp.xcworkspace")).unwrap();

        let found = find_xcode_project(&ios).unwrap();
        assert_eq!(found, ios.join("MyApp.xcodeproj").join("project.pbxproj"));
    }

    #[test]
    fn test_find_xcode_project_picks_first_sorted() {
        let temp = TempDir::new().unwrap();
        let ios = setup_ios_dir(&temp, &["Zeta.xcodeproj", "Alpha.xcodeproj"]);

        let found = find_xcode_project(&ios).unwrap();
        assert!(found.starts_with(ios.join("Alpha.xcodeproj")));
    }

    #[test]
    fn test_find_xcode_project_missing() {
        let temp = TempDir::new().unwrap();
        let ios = setup_ios_dir(&temp, &[]);
        std::fs::create_dir_all(ios.join("Pods")).unwrap();

        let err = find_xcode_project(&ios).unwrap_err();
        assert!(matches!(
            err,
            crate::NexjaxError::Project(ProjectError::NotFound(_))
        ));
    }

    #[test]
    fn test_inject_into_every_build_settings_block() {
        let (patched, outcome) = apply_team_id(PBXPROJ_WITHOUT_TEAM, "ABC123");

        assert_eq!(outcome, TeamIdPatch::Injected { count: 2 });
        assert_eq!(
            patched
                .matches("buildSettings = {\n\t\t\t\tDEVELOPMENT_TEAM = ABC123;")
                .count(),
            2
        );
        assert!(patched.contains("PRODUCT_NAME = MyApp;"));
    }

    #[test]
    fn test_replace_existing_statements() {
        let (first, _) = apply_team_id(PBXPROJ_WITHOUT_TEAM, "OLD999");
        let content = first.replacen("DEVELOPMENT_TEAM = OLD999;", "DEVELOPMENT_TEAM   =  \"OLD999\" ;", 1);

        let (patched, outcome) = apply_team_id(&content, "NEW111");

        assert_eq!(outcome, TeamIdPatch::Replaced { count: 2 });
        assert_eq!(patched.matches("DEVELOPMENT_TEAM = NEW111;").count(), 2);
        assert!(!patched.contains("OLD999"));
    }

    #[test]
    fn test_team_id_is_inserted_literally() {
        let (patched, _) = apply_team_id(PBXPROJ_WITHOUT_TEAM, "$1TEAM");
        assert!(patched.contains("DEVELOPMENT_TEAM = $1TEAM;"));
    }

    #[test]
    fn test_patch_is_idempotent() {
        let (once, _) = apply_team_id(PBXPROJ_WITHOUT_TEAM, "ABC123");
        let (twice, outcome) = apply_team_id(&once, "ABC123");

        assert_eq!(once, twice);
        assert!(outcome.modified());
    }

    #[test]
    fn test_empty_team_id_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let ios = setup_ios_dir(&temp, &["MyApp.xcodeproj"]);
        let project_file = find_xcode_project(&ios).unwrap();

        let outcome = configure_team_id(&project_file, "").unwrap();

        assert_eq!(outcome, TeamIdPatch::Skipped);
        assert!(!outcome.modified());
        assert_eq!(
            std::fs::read_to_string(&project_file).unwrap(),
            PBXPROJ_WITHOUT_TEAM
        );
    }

    #[test]
    fn test_configure_team_id_writes_file() {
        let temp = TempDir::new().unwrap();
        let ios = setup_ios_dir(&temp, &["MyApp.xcodeproj"]);
        let project_file = find_xcode_project(&ios).unwrap();

        let outcome = configure_team_id(&project_file, "ABC123").unwrap();

        assert!(outcome.modified());
        let content = std::fs::read_to_string(&project_file).unwrap();
        assert_eq!(content.matches("DEVELOPMENT_TEAM = ABC123;").count(), 2);
    }
}
