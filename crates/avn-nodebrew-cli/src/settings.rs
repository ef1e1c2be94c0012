use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use avn_nodebrew::{DEFAULT_LIST_TIMEOUT, NodebrewClient};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub nodebrew_path: Option<PathBuf>,

    #[serde(default = "default_list_args")]
    pub list_args: Vec<String>,

    #[serde(default = "default_use_subcommand")]
    pub use_subcommand: String,

    #[serde(default = "default_list_timeout")]
    pub list_timeout_secs: u64,

    #[serde(default)]
    pub debug_logging: bool,

    #[serde(default = "default_max_log_size_bytes")]
    pub max_log_size_bytes: u64,
}

fn default_list_args() -> Vec<String> {
    vec!["list".to_string()]
}

fn default_use_subcommand() -> String {
    "use".to_string()
}

fn default_list_timeout() -> u64 {
    DEFAULT_LIST_TIMEOUT.as_secs()
}

fn default_max_log_size_bytes() -> u64 {
    5 * 1024 * 1024
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            nodebrew_path: None,
            list_args: default_list_args(),
            use_subcommand: default_use_subcommand(),
            list_timeout_secs: default_list_timeout(),
            debug_logging: false,
            max_log_size_bytes: default_max_log_size_bytes(),
        }
    }
}

impl Settings {
    /// Load settings from `path`; a missing file means defaults.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or is not
    /// valid settings JSON.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Zero disables the timeout.
    #[must_use]
    pub fn list_timeout(&self) -> Option<Duration> {
        (self.list_timeout_secs > 0).then(|| Duration::from_secs(self.list_timeout_secs))
    }

    /// Build the nodebrew client these settings describe. An explicitly
    /// configured path wins over `detected`.
    #[must_use]
    pub fn client(&self, detected: Option<PathBuf>) -> NodebrewClient {
        let client = match self.nodebrew_path.clone().or(detected) {
            Some(path) => NodebrewClient::new(path),
            None => NodebrewClient::default(),
        };
        client
            .with_list_args(self.list_args.iter().cloned())
            .with_use_subcommand(self.use_subcommand.clone())
            .with_timeout(self.list_timeout())
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    use super::{Settings, SettingsError};

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temporary directory should be created");

        let settings =
            Settings::load_from(&dir.path().join("settings.json")).expect("defaults load");

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.list_args, vec!["list"]);
        assert_eq!(settings.list_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let dir = tempfile::tempdir().expect("temporary directory should be created");
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{ "nodebrew_path": "/opt/nodebrew/nodebrew", "list_timeout_secs": 0 }"#,
        )
        .expect("write settings");

        let settings = Settings::load_from(&path).expect("settings load");

        assert_eq!(
            settings.nodebrew_path,
            Some(PathBuf::from("/opt/nodebrew/nodebrew"))
        );
        assert_eq!(settings.list_timeout(), None);
        assert_eq!(settings.use_subcommand, "use");
        assert!(!settings.debug_logging);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temporary directory should be created");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").expect("write settings");

        let result = Settings::load_from(&path);

        assert!(matches!(result, Err(SettingsError::Parse { .. })));
    }

    #[test]
    fn configured_path_overrides_detection() {
        let settings = Settings {
            nodebrew_path: Some(PathBuf::from("/custom/nodebrew")),
            ..Settings::default()
        };

        let client = settings.client(Some(PathBuf::from("/usr/local/bin/nodebrew")));

        assert_eq!(client.path(), Path::new("/custom/nodebrew"));
    }

    #[test]
    fn detection_used_when_no_path_configured() {
        let settings = Settings {
            use_subcommand: "switch".to_string(),
            ..Settings::default()
        };

        let client = settings.client(Some(PathBuf::from("/usr/local/bin/nodebrew")));

        assert_eq!(client.path(), Path::new("/usr/local/bin/nodebrew"));
        assert_eq!(
            client.activation_command("v4.2.0"),
            "/usr/local/bin/nodebrew switch v4.2.0 > /dev/null;"
        );
    }
}
