//! Schema bootstrap for the tables this application owns.
//!
//! `articles`, `journals`, `tags` and `article_tags` belong to the ingestion pipeline
//! and must exist before these migrations run. Every statement here is idempotent on
//! its own, so re-running against a database that was bootstrapped by hand is safe.

pub use sea_orm_migration::prelude::*;

mod m20250110_000001_create_users_table;
mod m20250110_000002_create_comments_table;
mod m20250110_000003_seed_anonymous_user;

pub use m20250110_000003_seed_anonymous_user::{
    ANONYMOUS_EMAIL, ANONYMOUS_USERNAME, ANONYMOUS_USER_ID,
};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250110_000001_create_users_table::Migration),
            Box::new(m20250110_000002_create_comments_table::Migration),
            Box::new(m20250110_000003_seed_anonymous_user::Migration),
        ]
    }
}
