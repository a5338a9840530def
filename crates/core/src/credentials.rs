//! Device shared-secret allow-list.
//!
//! Secrets are compared by exact string match. The list is built once at
//! startup and only read afterwards, so it is shared behind an `Arc` without
//! locking.

use std::collections::HashSet;

use crate::error::SecretsError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Sample secrets used when no secret source is configured.
pub const SAMPLE_SECRETS: [&str; 3] = [
    "secret-ABC-123-XYZ-001",
    "secret-ABC-123-XYZ-002",
    "secret-ABC-123-XYZ-003",
];

/// Lines starting with this marker are ignored when parsing secret lists.
const COMMENT_MARKER: char = '#';

// ---------------------------------------------------------------------------
// Allow-list
// ---------------------------------------------------------------------------

/// Fixed set of known-valid device secrets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretAllowList {
    secrets: HashSet<String>,
}

impl SecretAllowList {
    /// Build an allow-list from arbitrary strings.
    ///
    /// Entries are trimmed; blank entries are dropped so the empty secret can
    /// never be valid.
    pub fn new<I, S>(secrets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let secrets = secrets
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self { secrets }
    }

    /// The three sample secrets shipped with the service.
    pub fn sample() -> Self {
        Self::new(SAMPLE_SECRETS)
    }

    /// Parse a comma- or newline-delimited list, skipping `#` comment lines.
    ///
    /// `source_name` only labels the error when nothing usable was found.
    pub fn parse(raw: &str, source_name: &str) -> Result<Self, SecretsError> {
        let entries = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with(COMMENT_MARKER))
            .flat_map(|line| line.split(','));
        let list = Self::new(entries);
        if list.is_empty() {
            return Err(SecretsError::Empty {
                source_name: source_name.to_string(),
            });
        }
        Ok(list)
    }

    /// Merge another list into this one.
    pub fn extend(&mut self, other: SecretAllowList) {
        self.secrets.extend(other.secrets);
    }

    /// Membership test. Missing, empty or unknown secrets are all invalid.
    pub fn is_valid(&self, secret: &str) -> bool {
        !secret.is_empty() && self.secrets.contains(secret)
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}
