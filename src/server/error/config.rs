use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but cannot be parsed.
    ///
    /// Unset variables take their default and are never an error.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        name: String,
        value: String,
        reason: String,
    },

    /// The database settings could not be assembled into a connection URL.
    #[error("Invalid database connection settings: {0}")]
    InvalidDatabaseUrl(String),
}
