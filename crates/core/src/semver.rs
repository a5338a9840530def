//! Semantic Versioning 2.0.0 grammar check for firmware version strings.

use std::sync::LazyLock;

use regex::Regex;

/// Message surfaced to devices whose firmware string fails the grammar.
pub const FIRMWARE_FORMAT_MESSAGE: &str =
    "The firmware value does not match semantic versioning format.";

/// Field name the firmware error is reported under.
pub const FIRMWARE_FIELD: &str = "FirmwareVersion";

/// Anchored SemVer 2.0.0 grammar:
/// `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
///
/// Digits are spelled `[0-9]` because `\d` is Unicode-aware in `regex`.
pub const SEMVER_PATTERN: &str = concat!(
    r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)",
    r"(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
    r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
    r"(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
);

/// Compiled once, reused for every request.
static SEMVER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SEMVER_PATTERN).expect("valid regex"));

/// Whether `version` is a complete SemVer 2.0.0 string.
pub fn is_valid_version(version: &str) -> bool {
    SEMVER_RE.is_match(version)
}
