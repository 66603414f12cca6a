//! Environment-based configuration.
//!
//! Every recognized variable has a default so the server starts against a local Postgres
//! with no environment at all. Values that are present but malformed are rejected.

use std::{net::SocketAddr, time::Duration};

use url::Url;

use crate::server::error::config::ConfigError;

const DEFAULT_DATABASE_USER: &str = "postgres";
const DEFAULT_DATABASE_HOST: &str = "localhost";
const DEFAULT_DATABASE_PORT: u16 = 5432;
const DEFAULT_DATABASE_NAME: &str = "postgres";
const DEFAULT_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_IDLE_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_CONNECT_RETRIES: u32 = 3;

/// TLS behaviour of the database connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SslMode {
    Disable,
    Prefer,
    /// Encrypt without verifying the server certificate.
    NoVerify,
}

impl SslMode {
    /// Value of the `sslmode` connection parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Disable => "disable",
            Self::Prefer => "prefer",
            Self::NoVerify => "require",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "disable" | "off" | "false" => Some(Self::Disable),
            "prefer" => Some(Self::Prefer),
            "no-verify" | "insecure" | "require" => Some(Self::NoVerify),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub ssl_mode: SslMode,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// Idle connections are closed after this long.
    pub idle_timeout: Duration,
    /// Bound on opening a connection and on waiting for a free pooled one.
    pub connect_timeout: Duration,
    /// Connection attempts made at startup before giving up.
    pub connect_retries: u32,
}

impl DatabaseConfig {
    /// Assembles the Postgres connection URL.
    ///
    /// Credentials and the database name are percent-encoded by `url`, so passwords
    /// containing `@`, `/` or `:` are safe.
    ///
    /// # Returns
    /// - `Ok(String)` - Connection URL including the `sslmode` parameter
    /// - `Err(ConfigError::InvalidDatabaseUrl)` - Host or credentials cannot form a URL
    pub fn connection_url(&self) -> Result<String, ConfigError> {
        let mut url = Url::parse(&format!("postgres://{}:{}", self.host, self.port))
            .map_err(|e| ConfigError::InvalidDatabaseUrl(e.to_string()))?;

        url.set_username(&self.user)
            .map_err(|_| ConfigError::InvalidDatabaseUrl("username rejected".to_string()))?;
        if !self.password.is_empty() {
            url.set_password(Some(&self.password))
                .map_err(|_| ConfigError::InvalidDatabaseUrl("password rejected".to_string()))?;
        }
        url.path_segments_mut()
            .map_err(|_| ConfigError::InvalidDatabaseUrl("host cannot carry a path".to_string()))?
            .push(&self.name);
        url.query_pairs_mut()
            .append_pair("sslmode", self.ssl_mode.as_param());

        Ok(url.into())
    }
}

pub struct Config {
    pub database: DatabaseConfig,
    /// Address the Dioxus launcher binds, taken from its `IP`/`PORT` variables.
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database: DatabaseConfig::from_lookup(|name| std::env::var(name).ok())?,
            listen_addr: dioxus_cli_config::fullstack_address_or_localhost(),
        })
    }
}

impl DatabaseConfig {
    /// Reads database settings through `lookup`, applying defaults for unset names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let ssl_mode = match lookup("DATABASE_SSL_MODE") {
            Some(value) => SslMode::parse(&value).ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "DATABASE_SSL_MODE".to_string(),
                value,
                reason: "expected disable, prefer or no-verify".to_string(),
            })?,
            None => SslMode::NoVerify,
        };

        Ok(Self {
            user: text("DATABASE_USER", DEFAULT_DATABASE_USER),
            password: text("DATABASE_PASSWORD", ""),
            host: text("DATABASE_HOST", DEFAULT_DATABASE_HOST),
            port: parse_or(&lookup, "DATABASE_PORT", DEFAULT_DATABASE_PORT)?,
            name: text("DATABASE_NAME", DEFAULT_DATABASE_NAME),
            ssl_mode,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            idle_timeout: Duration::from_millis(parse_or(
                &lookup,
                "DATABASE_IDLE_TIMEOUT_MS",
                DEFAULT_IDLE_TIMEOUT_MS,
            )?),
            connect_timeout: Duration::from_millis(parse_or(
                &lookup,
                "DATABASE_CONNECT_TIMEOUT_MS",
                DEFAULT_CONNECT_TIMEOUT_MS,
            )?),
            connect_retries: parse_or(&lookup, "DATABASE_CONNECT_RETRIES", DEFAULT_CONNECT_RETRIES)?
                .max(1),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}
