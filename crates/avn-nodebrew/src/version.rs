const CURRENT_MARKER: &str = "current:";

/// Extract installed version identifiers from `nodebrew list` output.
///
/// nodebrew prints one version per line, then a blank line and a
/// `current: <version>` line. Reading stops at the first blank line or
/// `current:` marker; anything after it is not part of the listing.
#[must_use]
pub fn parse_listing(raw: &str) -> Vec<String> {
    raw.lines()
        .take_while(|line| !line.is_empty() && !is_current_marker(line))
        .map(|line| line.trim().to_string())
        .collect()
}

fn is_current_marker(line: &str) -> bool {
    line.strip_prefix(CURRENT_MARKER)
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}
