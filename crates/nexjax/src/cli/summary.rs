//! Human-readable run summary

use console::style;

use nexjax_core::config::defaults::OVERRIDE_CONFIG_FILE;
use nexjax_core::{IosConfig, ManifestChange, ManifestOutcome, ProjectKind, SyncReport, TeamIdPatch};

use super::output;

/// Print the step log and the configuration summary
pub fn print(report: &SyncReport) {
    let config = &report.config;

    if report.team_id_from_args {
        output::success(&format!("Team ID saved to config: {}", config.team_id));
    }

    match report.project_kind {
        ProjectKind::Expo => output::info("Detected Expo project (reading from app.json)"),
        ProjectKind::BareReactNative => {
            output::info("Detected bare React Native project (reading from package.json)")
        }
    }
    println!();

    match &report.team {
        TeamIdPatch::Skipped => output::warning("No Team ID configured (skipping)"),
        TeamIdPatch::Replaced { .. } | TeamIdPatch::Injected { .. } => {
            output::success(&format!("Updated DEVELOPMENT_TEAM: {}", config.team_id))
        }
    }

    match &report.manifest {
        ManifestOutcome::NotFound => {
            output::warning("Info.plist not found (skipping Info.plist updates)")
        }
        ManifestOutcome::Patched(patch) if !patch.modified() => {
            output::success("Info.plist already up to date")
        }
        ManifestOutcome::Patched(patch) => print_manifest_changes(&patch.changes, config),
    }

    println!();
    output::success("iOS configuration complete!");
    println!();
    print_configuration(config);

    println!();
    output::tip(&format!("Edit {} to customize settings", OVERRIDE_CONFIG_FILE));
    output::tip(&format!(
        "Add permission strings in app.json (Expo) or {}",
        OVERRIDE_CONFIG_FILE
    ));
}

fn print_manifest_changes(changes: &[ManifestChange], config: &IosConfig) {
    let mut booleans = 0;
    let mut permissions = 0;

    for change in changes {
        match change {
            ManifestChange::Version => {
                output::success(&format!("Updated version: {}", config.version))
            }
            ManifestChange::BuildNumber => {
                output::success(&format!("Updated build number: {}", config.build_number))
            }
            ManifestChange::DisplayName => {
                output::success(&format!("Updated display name: {}", config.display_name))
            }
            ManifestChange::IpadOrientationsRemoved => {
                output::success("Configured iPhone-only (removed iPad orientations)")
            }
            ManifestChange::Boolean { .. } => booleans += 1,
            ManifestChange::Permission { .. } => permissions += 1,
        }
    }

    if booleans > 0 {
        output::success(&format!("Configured {} Info.plist boolean key(s)", booleans));
    }
    if permissions > 0 {
        output::success(&format!("Configured {} permission string(s)", permissions));
    }
}

fn print_configuration(config: &IosConfig) {
    println!("{}", output::header("Configuration Summary"));
    if config.has_team_id() {
        println!("{}", output::key_value("Team ID", &config.team_id));
    }
    println!("{}", output::key_value("Bundle ID", &config.bundle_identifier));
    println!("{}", output::key_value("Version", &style(&config.version).green().to_string()));
    println!("{}", output::key_value("Build Number", &config.build_number));
    println!("{}", output::key_value("Display Name", &config.display_name));
    println!(
        "{}",
        output::key_value("iPhone Only", if config.iphone_only { "Yes" } else { "No" })
    );

    if !config.info_plist.is_empty() {
        println!(
            "{}",
            output::key_value(
                "Info.plist booleans",
                &format!("{} configured", config.info_plist.len())
            )
        );
        for (key, value) in &config.info_plist {
            println!("    - {}: {}", key, value);
        }
    }

    if !config.permissions.is_empty() {
        println!(
            "{}",
            output::key_value(
                "Permissions",
                &format!("{} configured", config.permissions.len())
            )
        );
        for key in config.permissions.keys() {
            println!("    - {}", key);
        }
    }
}
