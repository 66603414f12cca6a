//! Comment factory for seeding existing comments.

use crate::factory::helpers::{base_time, next_id};
use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    article_id: i32,
    user_id: i32,
    content: String,
    created_at: NaiveDateTime,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Comment {id}"`
    /// - created_at: `base_time()`
    pub fn new(db: &'a DatabaseConnection, article_id: i32, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            article_id,
            user_id,
            content: format!("Comment {}", id),
            created_at: base_time(),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            article_id: ActiveValue::Set(self.article_id),
            user_id: ActiveValue::Set(self.user_id),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values.
pub async fn create_comment(
    db: &DatabaseConnection,
    article_id: i32,
    user_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, article_id, user_id).build().await
}
