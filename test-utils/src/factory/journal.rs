//! Journal factory for creating test journal entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test journals with customizable fields.
pub struct JournalFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    rss_url: String,
    description: Option<String>,
}

impl<'a> JournalFactory<'a> {
    /// Creates a new JournalFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Journal {id}"`
    /// - rss_url: `"https://journals.example.com/{id}/rss"`
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Journal {}", id),
            rss_url: format!("https://journals.example.com/{}/rss", id),
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds and inserts the journal entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::journal::Model)` - Created journal entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::journal::Model, DbErr> {
        entity::journal::ActiveModel {
            name: ActiveValue::Set(self.name),
            rss_url: ActiveValue::Set(self.rss_url),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a journal with default values.
///
/// Shorthand for `JournalFactory::new(db).build().await`.
pub async fn create_journal(db: &DatabaseConnection) -> Result<entity::journal::Model, DbErr> {
    JournalFactory::new(db).build().await
}
