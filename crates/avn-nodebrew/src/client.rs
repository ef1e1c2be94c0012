use log::{debug, error, info, trace};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

use avn_backend::BackendError;
use avn_platform::ToolCommandExt;

use crate::version::parse_listing;

pub const DEFAULT_COMMAND: &str = "nodebrew";
pub const DEFAULT_LIST_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs nodebrew as a subprocess.
///
/// The binary, the arguments producing the listing, and the subcommand used
/// in activation commands are all configurable so other nodebrew-compatible
/// tools (or test doubles) can stand in.
#[derive(Debug, Clone)]
pub struct NodebrewClient {
    path: PathBuf,
    list_args: Vec<String>,
    use_subcommand: String,
    timeout: Option<Duration>,
}

impl Default for NodebrewClient {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

impl NodebrewClient {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            list_args: vec!["list".to_string()],
            use_subcommand: "use".to_string(),
            timeout: Some(DEFAULT_LIST_TIMEOUT),
        }
    }

    #[must_use]
    pub fn with_list_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list_args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_use_subcommand(mut self, subcommand: impl Into<String>) -> Self {
        self.use_subcommand = subcommand.into();
        self
    }

    /// `None` waits for the listing indefinitely.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn build_command(&self, args: &[String]) -> Command {
        debug!(
            "Building nodebrew command: {} {}",
            self.path.display(),
            args.join(" ")
        );

        let mut cmd = Command::new(&self.path);
        cmd.args(args);
        cmd.stdin(std::process::Stdio::null());
        cmd.kill_on_drop(true);
        cmd.plain_output();
        cmd.hide_window();
        cmd
    }

    async fn execute(&self, args: &[String]) -> Result<String, BackendError> {
        info!("Executing nodebrew command: {}", args.join(" "));

        let mut cmd = self.build_command(args);
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| {
                    error!("nodebrew command timed out after {limit:?}: args={args:?}");
                    BackendError::Timeout
                })??,
            None => cmd.output().await?,
        };

        debug!("nodebrew command exit status: {:?}", output.status);
        trace!("nodebrew stdout: {}", String::from_utf8_lossy(&output.stdout));

        if !output.stderr.is_empty() {
            trace!("nodebrew stderr: {}", String::from_utf8_lossy(&output.stderr));
        }

        if output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout).to_string();
            debug!("nodebrew command succeeded, output: {} bytes", stdout.len());
            Ok(stdout)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            error!("nodebrew command failed: args={args:?}, stderr='{stderr}'");
            Err(BackendError::CommandFailed { stderr })
        }
    }

    /// List installed version identifiers.
    ///
    /// # Errors
    /// Returns an error if nodebrew cannot be spawned, exits unsuccessfully,
    /// or does not finish within the configured timeout.
    pub async fn list_installed(&self) -> Result<Vec<String>, BackendError> {
        let output = self.execute(&self.list_args).await?;
        Ok(parse_listing(&output))
    }

    /// Shell text switching the calling shell to `version`, silenced.
    ///
    /// Words that the shell would split or expand are single-quoted.
    #[must_use]
    pub fn activation_command(&self, version: &str) -> String {
        format!(
            "{} {} {} > /dev/null;",
            shell_quote(&self.path.to_string_lossy()),
            shell_quote(&self.use_subcommand),
            shell_quote(version)
        )
    }
}

fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, '_' | '-' | '.' | '/' | '@' | '+' | ':' | ',' | '%')
        });
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', "'\\''"))
    }
}
