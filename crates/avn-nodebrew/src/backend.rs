use async_trait::async_trait;
use log::debug;
use std::path::PathBuf;

use avn_backend::{BackendError, VersionManager};

use crate::client::{DEFAULT_COMMAND, NodebrewClient};
use crate::detection::NodebrewDetection;

#[derive(Debug, Clone, Default)]
pub struct NodebrewBackend {
    client: NodebrewClient,
}

impl NodebrewBackend {
    #[must_use]
    pub fn new(client: NodebrewClient) -> Self {
        Self { client }
    }

    /// Backend for a detected installation, or for a bare `nodebrew` on
    /// `PATH` when detection found nothing.
    #[must_use]
    pub fn from_detection(detection: &NodebrewDetection) -> Self {
        let path = detection
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COMMAND));
        Self::new(NodebrewClient::new(path))
    }

    #[must_use]
    pub fn client(&self) -> &NodebrewClient {
        &self.client
    }
}

#[async_trait]
impl VersionManager for NodebrewBackend {
    fn name(&self) -> &'static str {
        "nodebrew"
    }

    async fn list_installed(&self) -> Result<Vec<String>, BackendError> {
        debug!("nodebrew: listing installed versions");
        self.client.list_installed().await
    }

    fn activation_command(&self, version: &str) -> String {
        self.client.activation_command(version)
    }
}
