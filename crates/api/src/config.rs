use std::str::FromStr;

use axum::http::HeaderValue;

/// Where technician records are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl StorageBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Memory => "memory",
        }
    }
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::Invalid {
                var: "STORAGE_BACKEND",
                reason: format!("unknown backend '{other}', expected 'postgres' or 'memory'"),
            }),
        }
    }
}

/// Origins allowed by the CORS layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*`: every origin.
    Any,
    List(Vec<HeaderValue>),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be set")]
    Missing { var: &'static str },

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Server configuration, built once at start-up.
///
/// All fields have defaults suitable for local development except
/// `DATABASE_URL`, which the Postgres backend requires.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins from comma-separated `CORS_ORIGINS` (default: `*`).
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub storage: StorageBackend,
    pub database_url: Option<String>,
    /// Postgres pool size (default: `20`).
    pub db_max_connections: u32,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default    |
    /// |------------------------|------------|
    /// | `HOST`                 | `0.0.0.0`  |
    /// | `PORT`                 | `3000`     |
    /// | `CORS_ORIGINS`         | `*`        |
    /// | `REQUEST_TIMEOUT_SECS` | `30`       |
    /// | `STORAGE_BACKEND`      | `postgres` |
    /// | `DATABASE_URL`         | (none)     |
    /// | `DB_MAX_CONNECTIONS`   | `20`       |
    /// | `LOG_FORMAT`           | `pretty`   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 3000u16)?;
        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 20u32)?;

        let cors_origins =
            parse_cors_origins(&lookup("CORS_ORIGINS").unwrap_or_else(|| "*".into()))?;

        let storage = match lookup("STORAGE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => StorageBackend::Postgres,
        };

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if storage == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing {
                var: "DATABASE_URL",
            });
        }

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    reason: format!("unknown format '{other}', expected 'pretty' or 'json'"),
                })
            }
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage,
            database_url,
            db_max_connections,
            log_format,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
    }
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    origins
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                reason: format!("'{origin}': {e}"),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
