//! Shared helper utilities for factory methods.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Fixed reference instant so ordering assertions never depend on the wall clock.
pub fn base_time() -> NaiveDateTime {
    DateTime::<Utc>::from_timestamp(1_704_067_200, 0)
        .unwrap_or_default()
        .naive_utc()
}

/// Returns `base_time()` shifted forward by whole days.
pub fn days_after_base(days: i64) -> NaiveDateTime {
    base_time() + Duration::days(days)
}

/// Creates a journal and `count` articles in it, published one day apart.
///
/// The article at index `i` is published `i` days after `base_time()`, so the newest
/// article is the last one in the returned vector.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of articles to create
///
/// # Returns
/// - `Ok((journal, articles))` - Created journal and articles in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_journal_with_articles(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::journal::Model, Vec<entity::article::Model>), DbErr> {
    let journal = crate::factory::journal::create_journal(db).await?;

    let mut articles = Vec::with_capacity(count);
    for i in 0..count {
        let article = crate::factory::article::ArticleFactory::new(db)
            .journal_id(journal.id)
            .published_date(days_after_base(i as i64))
            .build()
            .await?;
        articles.push(article);
    }

    Ok((journal, articles))
}
