mod backend;
mod client;
mod detection;
mod version;

pub use backend::NodebrewBackend;
pub use client::{DEFAULT_COMMAND, DEFAULT_LIST_TIMEOUT, NodebrewClient};
pub use detection::{NodebrewDetection, detect_nodebrew};
pub use version::parse_listing;

pub use avn_backend::{BackendError, VersionManager, VersionMatch, find_version, match_version};

/// Name this integration registers under with `avn`.
pub const PLUGIN_NAME: &str = "avn-nodebrew";

/// Resolve `specifier` against whatever nodebrew is found on this machine.
///
/// # Errors
/// Returns an error if nodebrew cannot be run, its listing fails, or no
/// installed version satisfies `specifier`.
pub async fn match_installed(specifier: &str) -> Result<VersionMatch, BackendError> {
    let detection = detect_nodebrew();
    let backend = NodebrewBackend::from_detection(&detection);
    match_version(&backend, specifier).await
}
