/// Terminal classification of a reading that did not reach threshold evaluation.
///
/// Both variants are deterministic: re-submitting the same request yields the
/// same rejection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Device secret is not within the valid range.")]
    Unauthorized,

    #[error("Invalid firmware: {0}")]
    InvalidFirmware(String),
}

/// Errors raised while building the secret allow-list from configuration.
#[derive(Debug, thiserror::Error)]
pub enum SecretsError {
    #[error("Secret source '{source_name}' did not contain any secrets")]
    Empty { source_name: String },
}
