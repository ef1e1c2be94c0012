//! npm-style version ranges evaluated with `semver`.
//!
//! Supported syntax:
//! - `4.2.0` - exact version; partial versions (`4`, `4.2`) cover the missing parts
//! - `^4.0.0`, `~4.2.0`, `>=4`, `<6.0.0` - operators
//! - `4.x`, `4.2.*`, `*`, empty - wildcards
//! - `>=4 <6` - space-separated comparators, all must match
//! - `1.2 - 2.3` - hyphen range (inclusive)
//! - `^4 || ^6` - alternatives, any may match

use semver::{Version, VersionReq};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RangeParseError {
    #[error("Invalid version range '{input}': {reason}")]
    Syntax { input: String, reason: String },

    #[error("Invalid version range '{input}': {source}")]
    Requirement {
        input: String,
        #[source]
        source: semver::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRange {
    alternatives: Vec<VersionReq>,
}

impl VersionRange {
    #[must_use]
    pub fn satisfies(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|req| req.matches(version))
    }
}

impl FromStr for VersionRange {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let alternatives = s
            .split("||")
            .map(|alt| {
                let translated = translate_comparator_set(alt.trim()).map_err(|reason| {
                    RangeParseError::Syntax {
                        input: s.to_string(),
                        reason,
                    }
                })?;
                VersionReq::parse(&translated).map_err(|source| RangeParseError::Requirement {
                    input: s.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { alternatives })
    }
}

/// Rewrite one npm comparator set into the comma-separated form `VersionReq`
/// parses.
fn translate_comparator_set(set: &str) -> Result<String, String> {
    if let Some((low, high)) = set.split_once(" - ") {
        let low = strip_wildcards(bare_version(low.trim())?);
        let high = strip_wildcards(bare_version(high.trim())?);
        return Ok(match (low.is_empty(), high.is_empty()) {
            (true, true) => "*".to_string(),
            (true, false) => format!("<={high}"),
            (false, true) => format!(">={low}"),
            (false, false) => format!(">={low}, <={high}"),
        });
    }

    let comparators = join_operator_tokens(set)?
        .iter()
        .map(|token| translate_comparator(token))
        .collect::<Result<Vec<_>, _>>()?;
    let comparators: Vec<String> = comparators.into_iter().flatten().collect();

    if comparators.is_empty() {
        Ok("*".to_string())
    } else {
        Ok(comparators.join(", "))
    }
}

// `>= 4.0.0` is two whitespace tokens but one comparator.
fn join_operator_tokens(set: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut pending_op = String::new();

    for token in set.split_whitespace() {
        if token.chars().all(is_operator_char) {
            pending_op.push_str(token);
            continue;
        }
        tokens.push(format!("{pending_op}{token}"));
        pending_op.clear();
    }

    if pending_op.is_empty() {
        Ok(tokens)
    } else {
        Err(format!("operator '{pending_op}' has no version"))
    }
}

fn translate_comparator(token: &str) -> Result<Option<String>, String> {
    let split = token
        .find(|c: char| !is_operator_char(c))
        .unwrap_or(token.len());
    let (op, version) = token.split_at(split);

    let op = match op {
        "" | "=" => "=",
        "~>" => "~",
        "<" | "<=" | ">" | ">=" | "^" | "~" => op,
        _ => return Err(format!("unknown operator '{op}'")),
    };
    let version = strip_wildcards(bare_version(version)?);

    if version.is_empty() {
        // `*`, `x`, `>=*`: no constraint
        return Ok(None);
    }

    Ok(Some(format!("{op}{version}")))
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '<' | '>' | '=' | '^' | '~')
}

/// Strip a leading `v` and reject anything that cannot be part of a version.
fn bare_version(version: &str) -> Result<&str, String> {
    let version = version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version);

    if version.is_empty() {
        return Err("missing version".to_string());
    }
    if version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+' | '*'))
    {
        Ok(version)
    } else {
        Err(format!("'{version}' is not a version"))
    }
}

/// Drop trailing wildcard components: `4.x` -> `4`, `*` -> ``.
fn strip_wildcards(version: &str) -> &str {
    let mut end = 0;
    for (idx, part) in version.splitn(3, '.').enumerate() {
        if matches!(part, "x" | "X" | "*") {
            break;
        }
        end = if idx == 0 { part.len() } else { end + 1 + part.len() };
    }
    &version[..end]
}
