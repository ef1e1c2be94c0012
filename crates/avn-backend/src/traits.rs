use async_trait::async_trait;

use crate::error::BackendError;

/// A version manager able to list what it has installed and to describe how
/// to switch to one of those versions.
#[async_trait]
pub trait VersionManager: Send + Sync {
    fn name(&self) -> &'static str;

    /// Installed version identifiers in the order the tool reports them.
    async fn list_installed(&self) -> Result<Vec<String>, BackendError>;

    /// Shell text that activates `version` when evaluated by the calling
    /// shell. Building it never runs anything.
    fn activation_command(&self, version: &str) -> String;
}
