//! avn-nodebrew - pick the installed nodebrew version matching a semver range
//!
//! The `match` subcommand prints a command for the calling shell to evaluate,
//! e.g. `eval "$(avn-nodebrew match node@^4.0.0)"`.

mod cli;
mod error;
mod logging;
mod settings;

use clap::Parser;
use log::{debug, warn};
use std::path::Path;
use std::process::ExitCode;
use tokio::io::AsyncReadExt;

use avn_nodebrew::{
    BackendError, NodebrewBackend, VersionManager, detect_nodebrew, find_version, match_version,
    parse_listing,
};
use avn_platform::AppPaths;

use crate::cli::{Cli, Command};
use crate::error::AppError;
use crate::settings::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("avn-nodebrew: {e}");
            ExitCode::from(e.exit_status())
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let paths = AppPaths::new();
    let settings_path = cli
        .config
        .clone()
        .or_else(|| paths.as_ref().ok().map(AppPaths::settings_file));
    let settings = load_settings(&cli, settings_path.as_deref())?;

    logging::init_logging(
        cli.verbose,
        settings.debug_logging,
        paths.as_ref().ok(),
        settings.max_log_size_bytes,
    );
    if let Err(e) = &paths
        && cli.config.is_none()
    {
        warn!("{e}; using default settings");
    }
    match &settings_path {
        Some(path) if path.is_file() => debug!("settings loaded from {}", path.display()),
        Some(path) => debug!("no settings at {}, using defaults", path.display()),
        None => {}
    }
    debug!("settings: {settings:?}");

    match cli.command {
        Command::Match { specifier, json } => {
            let backend = backend_for(&settings);
            let found = match_version(&backend, &specifier).await?;
            if json {
                println!("{}", serde_json::to_string(&found)?);
            } else {
                println!("{}", found.command);
            }
        }
        Command::List => {
            let backend = backend_for(&settings);
            for version in backend.list_installed().await? {
                println!("{version}");
            }
        }
        Command::Find { specifier, from } => {
            let raw = read_listing(&from).await?;
            let versions = parse_listing(&raw);
            let version = find_version(&versions, &specifier)
                .ok_or_else(|| BackendError::no_match(&specifier))?;
            println!("{version}");
        }
        Command::Detect => {
            let detection = detect_nodebrew();
            let path = detection.path.ok_or(BackendError::NotFound)?;
            let location = if detection.in_path {
                "on PATH"
            } else {
                "not on PATH"
            };
            println!("{} ({location})", path.display());
        }
    }

    Ok(())
}

/// Settings from `path` (defaults when absent) with command-line overrides
/// applied on top.
fn load_settings(cli: &Cli, path: Option<&Path>) -> Result<Settings, AppError> {
    let mut settings = match path {
        Some(path) => Settings::load_from(path)?,
        None => Settings::default(),
    };
    if let Some(path) = &cli.nodebrew {
        settings.nodebrew_path = Some(path.clone());
    }
    if let Some(secs) = cli.timeout {
        settings.list_timeout_secs = secs;
    }
    Ok(settings)
}

fn backend_for(settings: &Settings) -> NodebrewBackend {
    let detected = if settings.nodebrew_path.is_none() {
        detect_nodebrew().path
    } else {
        None
    };
    NodebrewBackend::new(settings.client(detected))
}

async fn read_listing(from: &str) -> Result<String, AppError> {
    let result = if from == "-" {
        let mut raw = String::new();
        tokio::io::stdin()
            .read_to_string(&mut raw)
            .await
            .map(|_| raw)
    } else {
        tokio::fs::read_to_string(from).await
    };

    result.map_err(|source| AppError::Listing {
        origin: if from == "-" {
            "stdin".to_string()
        } else {
            from.to_string()
        },
        source,
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::PathBuf;

    use super::load_settings;
    use crate::cli::Cli;
    use crate::settings::Settings;

    #[test]
    fn flags_override_settings_file() {
        let dir = tempfile::tempdir().expect("temporary directory should be created");
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{ "nodebrew_path": "/opt/nodebrew", "list_timeout_secs": 10, "use_subcommand": "switch" }"#,
        )
        .expect("write settings");
        let cli = Cli::try_parse_from([
            "avn-nodebrew",
            "list",
            "--nodebrew",
            "/usr/bin/nodebrew",
            "--timeout",
            "0",
        ])
        .expect("arguments should parse");

        let settings = load_settings(&cli, Some(&path)).expect("settings load");

        assert_eq!(settings.nodebrew_path, Some(PathBuf::from("/usr/bin/nodebrew")));
        assert_eq!(settings.list_timeout(), None);
        assert_eq!(settings.use_subcommand, "switch");
    }

    #[test]
    fn missing_settings_file_keeps_defaults() {
        let dir = tempfile::tempdir().expect("temporary directory should be created");
        let cli = Cli::try_parse_from(["avn-nodebrew", "list"]).expect("arguments should parse");

        let settings = load_settings(&cli, Some(&dir.path().join("settings.json")))
            .expect("defaults load");

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn malformed_settings_file_is_reported() {
        let dir = tempfile::tempdir().expect("temporary directory should be created");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "[").expect("write settings");
        let cli = Cli::try_parse_from(["avn-nodebrew", "list"]).expect("arguments should parse");

        let error = load_settings(&cli, Some(&path)).expect_err("malformed file should fail");

        assert_eq!(error.exit_status(), 1);
    }
}
