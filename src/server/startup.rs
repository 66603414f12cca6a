use std::time::Duration;

use dioxus_logger::tracing;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::server::{config::Config, error::AppError};

/// Backoff schedule for startup connection attempts.
///
/// The delay before retry `n` (1-indexed) is `initial_delay * factor^(n-1)`, capped at
/// `max_delay`.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts including the first one.
    pub attempts: u32,
    pub initial_delay: Duration,
    pub factor: u32,
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(attempts: u32) -> Self {
        Self {
            attempts: attempts.max(1),
            initial_delay: Duration::from_secs(1),
            factor: 2,
            max_delay: Duration::from_secs(5),
        }
    }

    /// Delay to wait after failed attempt number `attempt` (1-indexed).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let multiplier = self
            .factor
            .checked_pow(attempt.saturating_sub(1))
            .unwrap_or(u32::MAX);

        self.initial_delay
            .checked_mul(multiplier)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }
}

/// Connects to the Postgres database and bootstraps the schema.
///
/// Builds the connection pool from configuration, retrying connection failures with
/// exponential backoff, then runs all pending SeaORM migrations. The migrations create
/// the `users` and `comments` tables if absent and seed the anonymous user; running them
/// against an already bootstrapped database is a no-op.
///
/// # Arguments
/// - `config` - Application configuration containing the database settings
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected pool with the schema bootstrapped
/// - `Err(AppError)` - Invalid settings, retries exhausted, or migration failure
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};

    let settings = &config.database;
    let mut opt = ConnectOptions::new(settings.connection_url()?);
    opt.max_connections(settings.max_connections)
        .idle_timeout(settings.idle_timeout)
        .connect_timeout(settings.connect_timeout)
        .acquire_timeout(settings.connect_timeout)
        .sqlx_logging(false);

    let db = connect_with_retry(opt, &RetryPolicy::new(settings.connect_retries)).await?;

    Migrator::up(&db, None).await?;
    tracing::info!("Database schema is up to date");

    Ok(db)
}

/// Opens a pool and verifies it with a ping, retrying according to `policy`.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - A pool that answered a ping
/// - `Err(DbErr)` - The error from the final attempt once all attempts failed
pub async fn connect_with_retry(
    opt: ConnectOptions,
    policy: &RetryPolicy,
) -> Result<DatabaseConnection, DbErr> {
    let mut attempt = 1;

    loop {
        tracing::info!(
            "Attempting to connect to database ({}/{})",
            attempt,
            policy.attempts
        );

        let result = match Database::connect(opt.clone()).await {
            Ok(db) => db.ping().await.map(|_| db),
            Err(err) => Err(err),
        };

        match result {
            Ok(db) => {
                tracing::info!("Database connection successful");
                return Ok(db);
            }
            Err(err) if attempt < policy.attempts => {
                let delay = policy.delay_after(attempt);
                tracing::warn!(
                    "Database connection failed: {}; retrying in {:?}",
                    err,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => {
                tracing::error!(
                    "Database connection failed after {} attempts: {}",
                    attempt,
                    err
                );
                return Err(err);
            }
        }
    }
}
