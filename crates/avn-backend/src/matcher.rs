use log::{debug, warn};
use semver::Version;

use crate::error::BackendError;
use crate::range::VersionRange;
use crate::traits::VersionManager;
use crate::types::{Identifier, VersionMatch, parse_version};

/// Find the highest installed version satisfying `specifier`.
///
/// A candidate qualifies when its name equals the specifier's name (both
/// normalized, both possibly absent) and its number satisfies the specifier's
/// range. Among qualifying candidates the greatest number wins; on equal
/// numbers the one listed first is kept.
#[must_use]
pub fn find_version<'a, S: AsRef<str>>(versions: &'a [S], specifier: &str) -> Option<&'a str> {
    let wanted = Identifier::parse(specifier.trim());
    let range: VersionRange = match wanted.number.parse() {
        Ok(range) => range,
        Err(e) => {
            warn!("ignoring unparsable specifier {specifier}: {e}");
            return None;
        }
    };

    let mut highest: Option<(&str, Version)> = None;

    for item in versions {
        let candidate: &str = item.as_ref();
        let id = Identifier::parse(candidate);
        if id.name != wanted.name {
            continue;
        }
        let Some(number) = parse_version(id.number) else {
            continue;
        };
        if !range.satisfies(&number) {
            continue;
        }

        let promote = highest
            .as_ref()
            .is_none_or(|(_, best)| number.cmp_precedence(best).is_gt());
        if promote {
            highest = Some((candidate, number));
        }
    }

    highest.map(|(version, _)| version)
}

/// List what `manager` has installed, pick the best match for `specifier` and
/// build the command activating it.
///
/// # Errors
/// Returns the manager's error when listing fails, or
/// [`BackendError::NoMatchingVersion`] when nothing installed satisfies the
/// specifier.
pub async fn match_version(
    manager: &dyn VersionManager,
    specifier: &str,
) -> Result<VersionMatch, BackendError> {
    let versions = manager.list_installed().await?;
    debug!(
        "{}: {} installed versions considered for {specifier}",
        manager.name(),
        versions.len()
    );

    let version = find_version(&versions, specifier)
        .ok_or_else(|| BackendError::no_match(specifier))?;
    debug!("{}: {specifier} resolved to {version}", manager.name());

    Ok(VersionMatch {
        version: version.to_string(),
        command: manager.activation_command(version),
    })
}
