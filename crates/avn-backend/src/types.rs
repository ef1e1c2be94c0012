use regex::Regex;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static IDENTIFIER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)[-@](.+)$").expect("identifier pattern should compile")
});

/// A version identifier split into its runtime name and version number.
///
/// `node@4.2.0` and `node-4.2.0` both become name `node`, number `4.2.0`.
/// Identifiers without a separator (`v4.2.0`) have no name and keep the whole
/// string as the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier<'a> {
    pub name: Option<&'a str>,
    pub number: &'a str,
}

impl<'a> Identifier<'a> {
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        match IDENTIFIER_PATTERN.captures(raw) {
            Some(caps) => {
                let name = caps.get(1).map_or("", |m| m.as_str());
                let number = caps.get(2).map_or(raw, |m| m.as_str());
                Self {
                    name: Some(normalize_name(name)),
                    number,
                }
            }
            None => Self {
                name: None,
                number: raw,
            },
        }
    }
}

// io.js and node share a lineage; nodebrew lists io.js builds as `io`.
fn normalize_name(name: &str) -> &str {
    if name == "iojs" { "io" } else { name }
}

#[must_use]
pub fn parse_name(identifier: &str) -> Option<&str> {
    Identifier::parse(identifier).name
}

#[must_use]
pub fn parse_number(identifier: &str) -> &str {
    Identifier::parse(identifier).number
}

/// Parse a version number the way nodebrew prints it (`v4.2.0`).
///
/// Only surrounding whitespace and a lowercase `v` are tolerated.
#[must_use]
pub fn parse_version(number: &str) -> Option<Version> {
    let trimmed = number.trim();
    Version::parse(trimmed.strip_prefix('v').unwrap_or(trimmed)).ok()
}

/// The installed version chosen for a request and the shell text activating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionMatch {
    pub version: String,
    pub command: String,
}
