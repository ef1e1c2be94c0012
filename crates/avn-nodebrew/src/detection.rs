use log::debug;
use std::path::{Path, PathBuf};
use which::which;

use crate::client::DEFAULT_COMMAND;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodebrewDetection {
    pub found: bool,
    pub path: Option<PathBuf>,
    pub in_path: bool,
}

/// Locate the nodebrew script.
///
/// `$NODEBREW_ROOT` wins when it holds an installation, then `PATH`, then the
/// usual install locations.
#[must_use]
pub fn detect_nodebrew() -> NodebrewDetection {
    let root_binary = std::env::var_os("NODEBREW_ROOT")
        .map(PathBuf::from)
        .map(|root| binary_under_root(&root));
    let on_path = which(DEFAULT_COMMAND).ok();

    let detection = select_nodebrew(root_binary, on_path, common_nodebrew_paths());
    debug!("nodebrew detection: {detection:?}");
    detection
}

fn binary_under_root(root: &Path) -> PathBuf {
    root.join("current").join("bin").join(DEFAULT_COMMAND)
}

fn select_nodebrew(
    root_binary: Option<PathBuf>,
    on_path: Option<PathBuf>,
    candidates: Vec<PathBuf>,
) -> NodebrewDetection {
    if let Some(path) = root_binary.filter(|path| path.exists()) {
        return NodebrewDetection {
            found: true,
            path: Some(path),
            in_path: false,
        };
    }

    if let Some(path) = on_path {
        return NodebrewDetection {
            found: true,
            path: Some(path),
            in_path: true,
        };
    }

    match candidates.into_iter().find(|path| path.exists()) {
        Some(path) => NodebrewDetection {
            found: true,
            path: Some(path),
            in_path: false,
        },
        None => NodebrewDetection {
            found: false,
            path: None,
            in_path: false,
        },
    }
}

fn common_nodebrew_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(home) = dirs::home_dir() {
        paths.push(binary_under_root(&home.join(".nodebrew")));
    }

    #[cfg(target_os = "macos")]
    {
        paths.push(PathBuf::from("/opt/homebrew/bin/nodebrew"));
    }

    #[cfg(unix)]
    {
        paths.push(PathBuf::from("/usr/local/bin/nodebrew"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{binary_under_root, common_nodebrew_paths, select_nodebrew};

    fn touch(path: &std::path::Path) {
        std::fs::create_dir_all(path.parent().expect("path has a parent")).expect("create dirs");
        std::fs::write(path, "#!/usr/bin/env perl\n").expect("write fake nodebrew");
    }

    #[test]
    fn root_installation_takes_precedence() {
        let root = tempfile::tempdir().expect("temporary directory should be created");
        let binary = binary_under_root(root.path());
        touch(&binary);

        let detection = select_nodebrew(
            Some(binary.clone()),
            Some(PathBuf::from("/usr/bin/nodebrew")),
            Vec::new(),
        );

        assert!(detection.found);
        assert_eq!(detection.path, Some(binary));
        assert!(!detection.in_path);
    }

    #[test]
    fn missing_root_installation_falls_back_to_path() {
        let root = tempfile::tempdir().expect("temporary directory should be created");

        let detection = select_nodebrew(
            Some(binary_under_root(root.path())),
            Some(PathBuf::from("/usr/bin/nodebrew")),
            Vec::new(),
        );

        assert_eq!(detection.path, Some(PathBuf::from("/usr/bin/nodebrew")));
        assert!(detection.in_path);
    }

    #[test]
    fn falls_back_to_first_existing_candidate() {
        let dir = tempfile::tempdir().expect("temporary directory should be created");
        let missing = dir.path().join("missing").join("nodebrew");
        let present = dir.path().join("present").join("nodebrew");
        touch(&present);

        let detection = select_nodebrew(None, None, vec![missing, present.clone()]);

        assert!(detection.found);
        assert_eq!(detection.path, Some(present));
        assert!(!detection.in_path);
    }

    #[test]
    fn reports_not_found_when_nothing_exists() {
        let dir = tempfile::tempdir().expect("temporary directory should be created");

        let detection = select_nodebrew(None, None, vec![dir.path().join("nodebrew")]);

        assert!(!detection.found);
        assert!(detection.path.is_none());
    }

    #[test]
    fn common_paths_include_home_installation() {
        let Some(home) = dirs::home_dir() else {
            return;
        };

        assert!(common_nodebrew_paths().contains(
            &home
                .join(".nodebrew")
                .join("current")
                .join("bin")
                .join("nodebrew")
        ));
    }
}
