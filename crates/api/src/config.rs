use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use climate_core::credentials::SecretAllowList;
use climate_core::error::SecretsError;

/// Errors raised while loading [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got '{value}'")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),

    #[error("Failed to read secrets file {}: {source}", path.display())]
    SecretsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Secrets(#[from] SecretsError),
}

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. The device
/// secret allow-list falls back to the sample secrets when no source is set.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Log output format (default: pretty).
    pub log_format: LogFormat,
    /// Known-valid device secrets.
    pub device_secrets: SecretAllowList,
    /// True when no secret source was configured and the samples are in use.
    pub using_sample_secrets: bool,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `LOG_FORMAT`           | `pretty`                   |
    /// | `DEVICE_SECRETS`       | sample secrets             |
    /// | `DEVICE_SECRETS_FILE`  | none                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_or("PORT", lookup("PORT"), 3000, "u16")?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Some(bad) = cors_origins
            .iter()
            .find(|o| o.parse::<HeaderValue>().is_err())
        {
            return Err(ConfigError::InvalidOrigin(bad.clone()));
        }

        let request_timeout_secs: u64 =
            parse_or("REQUEST_TIMEOUT_SECS", lookup("REQUEST_TIMEOUT_SECS"), 30, "u64")?;

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse::<LogFormat>().map_err(|()| ConfigError::InvalidValue {
                key: "LOG_FORMAT",
                expected: "log format (pretty|json)",
                value: raw,
            })?,
            None => LogFormat::default(),
        };

        let (device_secrets, using_sample_secrets) = load_secrets(&lookup)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            log_format,
            device_secrets,
            using_sample_secrets,
        })
    }
}

fn parse_or<T: FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
            key,
            expected,
            value,
        }),
        None => Ok(default),
    }
}

/// Merge `DEVICE_SECRETS` and `DEVICE_SECRETS_FILE`.
///
/// A source that is set but empty is an error; no source at all means the
/// sample secrets.
fn load_secrets<F>(lookup: &F) -> Result<(SecretAllowList, bool), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let inline = lookup("DEVICE_SECRETS");
    let file = lookup("DEVICE_SECRETS_FILE").map(PathBuf::from);

    if inline.is_none() && file.is_none() {
        return Ok((SecretAllowList::sample(), true));
    }

    let mut secrets = SecretAllowList::default();
    if let Some(raw) = inline {
        secrets.extend(SecretAllowList::parse(&raw, "DEVICE_SECRETS")?);
    }
    if let Some(path) = file {
        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::SecretsFile {
            path: path.clone(),
            source,
        })?;
        secrets.extend(SecretAllowList::parse(&raw, &path.display().to_string())?);
    }
    Ok((secrets, false))
}
