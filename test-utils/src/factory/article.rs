//! Article factory for creating test article entities.
//!
//! Articles are normally written by the ingestion pipeline, so the factory fills every
//! column the pipeline would with plausible defaults.

use crate::factory::helpers::{base_time, next_id};
use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::article::ArticleFactory;
///
/// let article = ArticleFactory::new(&db)
///     .journal_id(journal.id)
///     .title("Custom Title")
///     .published_date(days_after_base(3))
///     .build()
///     .await?;
/// ```
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    title_zh: Option<String>,
    summary: Option<String>,
    summary_zh: Option<String>,
    doi: Option<String>,
    published_date: Option<NaiveDateTime>,
    journal_id: Option<i32>,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Article {id}"`
    /// - summary: `Some("Summary of article {id}")`
    /// - doi: `Some("10.1000/test.{id}")`
    /// - published_date: `Some(base_time())`
    /// - journal_id, title_zh, summary_zh: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Article {}", id),
            title_zh: None,
            summary: Some(format!("Summary of article {}", id)),
            summary_zh: None,
            doi: Some(format!("10.1000/test.{}", id)),
            published_date: Some(base_time()),
            journal_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the translated title and summary.
    pub fn translation(mut self, title_zh: impl Into<String>, summary_zh: impl Into<String>) -> Self {
        self.title_zh = Some(title_zh.into());
        self.summary_zh = Some(summary_zh.into());
        self
    }

    pub fn summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }

    pub fn published_date(mut self, published_date: NaiveDateTime) -> Self {
        self.published_date = Some(published_date);
        self
    }

    /// Leaves `published_date` NULL.
    pub fn undated(mut self) -> Self {
        self.published_date = None;
        self
    }

    pub fn journal_id(mut self, journal_id: i32) -> Self {
        self.journal_id = Some(journal_id);
        self
    }

    /// Builds and inserts the article entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::article::Model)` - Created article entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown journal)
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            title: ActiveValue::Set(self.title),
            title_zh: ActiveValue::Set(self.title_zh),
            volume: ActiveValue::Set(Some("12".to_string())),
            pages: ActiveValue::Set(Some("1-10".to_string())),
            authors: ActiveValue::Set(Some(r#"["A. Author","B. Author"]"#.to_string())),
            published_date: ActiveValue::Set(self.published_date),
            doi: ActiveValue::Set(self.doi),
            link: ActiveValue::Set(None),
            summary: ActiveValue::Set(self.summary),
            summary_zh: ActiveValue::Set(self.summary_zh),
            journal_id: ActiveValue::Set(self.journal_id),
            image_url: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values, optionally inside a journal.
pub async fn create_article(
    db: &DatabaseConnection,
    journal_id: Option<i32>,
) -> Result<entity::article::Model, DbErr> {
    let factory = ArticleFactory::new(db);
    match journal_id {
        Some(journal_id) => factory.journal_id(journal_id).build().await,
        None => factory.build().await,
    }
}
