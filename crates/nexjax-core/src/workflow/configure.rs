//! The configure run: resolve config, then patch pbxproj and Info.plist

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::config::defaults::IOS_DIR;
use crate::config::{detect_project_kind, ConfigResolver};
use crate::error::{ProjectError, Result};
use crate::ios::{
    configure_info_plist, configure_team_id, find_info_plist, find_xcode_project, ManifestPatch,
    TeamIdPatch,
};
use crate::types::{IosConfig, ProjectKind};

/// Options for a configure run
#[derive(Debug, Clone, Default)]
pub struct ConfigureOptions {
    /// Team identifier supplied for this run; replaces and persists the
    /// resolved one
    pub team_id: Option<String>,
}

impl ConfigureOptions {
    /// Set the run-time team identifier
    pub fn with_team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

/// What happened to Info.plist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ManifestOutcome {
    /// No Info.plist found; patching skipped
    NotFound,
    /// Info.plist located and patched (possibly with no changes)
    Patched(ManifestPatch),
}

/// Summary of a configure run
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Final resolved configuration
    pub config: IosConfig,
    /// Expo or bare React Native
    pub project_kind: ProjectKind,
    /// Whether the team id came from the command line
    pub team_id_from_args: bool,
    /// Patched Xcode project descriptor
    pub project_file: PathBuf,
    /// Outcome of the team id patch
    pub team: TeamIdPatch,
    /// Outcome of the Info.plist patch
    pub manifest: ManifestOutcome,
}

/// Runs the full sync for one project root
pub struct ConfigureWorkflow {
    root: PathBuf,
    options: ConfigureOptions,
}

impl ConfigureWorkflow {
    /// Create a new configure workflow
    pub fn new(root: &Path, options: ConfigureOptions) -> Self {
        Self {
            root: root.to_path_buf(),
            options,
        }
    }

    /// Execute the run.
    ///
    /// Fatal errors abort the remaining steps; files already written stay as
    /// they are.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn execute(&self) -> Result<SyncReport> {
        let ios_dir = self.root.join(IOS_DIR);
        if !ios_dir.is_dir() {
            return Err(ProjectError::DirectoryMissing(ios_dir).into());
        }

        let resolver = ConfigResolver::new(&self.root);
        let mut config = resolver.resolve()?;

        let team_id_arg = self.options.team_id.as_deref().filter(|t| !t.is_empty());
        if let Some(team_id) = team_id_arg {
            resolver.store().upsert_team_id(&mut config, team_id)?;
        }

        let project_kind = detect_project_kind(&self.root);
        info!(kind = %project_kind, "detected project kind");

        let project_file = find_xcode_project(&ios_dir)?;
        if !project_file.is_file() {
            return Err(ProjectError::FileMissing(project_file).into());
        }
        let team = configure_team_id(&project_file, &config.team_id)?;

        let manifest = match find_info_plist(&ios_dir) {
            Some(path) => ManifestOutcome::Patched(configure_info_plist(&path, &config)?),
            None => {
                warn!(dir = %ios_dir.display(), "Info.plist not found, skipping");
                ManifestOutcome::NotFound
            }
        };

        info!("iOS configuration complete");
        Ok(SyncReport {
            config,
            project_kind,
            team_id_from_args: team_id_arg.is_some(),
            project_file,
            team,
            manifest,
        })
    }
}
