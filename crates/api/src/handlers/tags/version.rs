use semver::Version;

/// Strips the decoration commonly attached to version strings before
/// parsing: surrounding whitespace, a leading `=`, and a leading `v`.
pub fn clean(version: &str) -> &str {
    let trimmed = version.trim();
    let trimmed = trimmed.strip_prefix('=').unwrap_or(trimmed);
    trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed)
}

/// Cleans and parses a version string per the semver grammar.
pub fn parse(version: &str) -> Option<Version> {
    Version::parse(clean(version)).ok()
}
