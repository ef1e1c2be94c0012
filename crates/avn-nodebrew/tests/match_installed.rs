#![cfg(unix)]

// Kept to a single test: it sets NODEBREW_ROOT for the whole process and
// executes a freshly written script.

use std::os::unix::fs::PermissionsExt;

use avn_nodebrew::{PLUGIN_NAME, match_installed};

#[tokio::test]
async fn match_installed_uses_nodebrew_under_root() {
    let root = tempfile::tempdir().expect("temporary directory should be created");
    let bin_dir = root.path().join("current").join("bin");
    std::fs::create_dir_all(&bin_dir).expect("create bin directory");
    let script = bin_dir.join("nodebrew");
    std::fs::write(
        &script,
        "#!/bin/sh\nprintf 'v0.10.29\\nv4.2.0\\nv5.1.0\\n\\ncurrent: v4.2.0\\n'\n",
    )
    .expect("write fake nodebrew");
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
        .expect("make fake nodebrew executable");

    // SAFETY: this test binary runs no other threads reading the environment.
    unsafe { std::env::set_var("NODEBREW_ROOT", root.path()) };

    let found = match_installed("4.x").await.expect("a version should match");

    assert_eq!(PLUGIN_NAME, "avn-nodebrew");
    assert_eq!(found.version, "v4.2.0");
    assert!(found.command.contains("current/bin/nodebrew"));
    assert!(found.command.ends_with(" use v4.2.0 > /dev/null;"));

    let missing = match_installed("node@^9").await;
    assert!(matches!(
        missing,
        Err(avn_nodebrew::BackendError::NoMatchingVersion { .. })
    ));
}
