use super::*;
use test_utils::factory::{
    article::ArticleFactory,
    helpers::{create_journal_with_articles, days_after_base},
};

/// Tests that a page is ordered newest first.
///
/// Creates 3 articles published on consecutive days and verifies the listing returns
/// them in reverse publication order.
///
/// Expected: Ok with articles newest to oldest
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, articles) = create_journal_with_articles(db, 3).await?;

    let repo = ArticleRepository::new(db);
    let result = repo.list(10, 0).await?;

    let ids: Vec<i32> = result.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![articles[2].id, articles[1].id, articles[0].id]);

    Ok(())
}

/// Tests that limit and offset select the expected window.
///
/// With 12 articles, page 2 of size 10 must contain exactly the 2 oldest articles.
///
/// Expected: Ok with 2 articles
#[tokio::test]
async fn returns_second_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, articles) = create_journal_with_articles(db, 12).await?;

    let repo = ArticleRepository::new(db);
    let result = repo.list(10, 10).await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].id, articles[1].id);
    assert_eq!(result[1].id, articles[0].id);

    Ok(())
}

/// Tests that an offset past the end yields an empty page.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_past_last_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_journal_with_articles(db, 3).await?;

    let repo = ArticleRepository::new(db);
    let result = repo.list(10, 20).await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests that the journal name is joined onto each article.
///
/// Articles without a journal are still listed, with no journal name.
///
/// Expected: Ok with `journal_name` set only for the article in a journal
#[tokio::test]
async fn includes_journal_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let journal = factory::create_journal(db).await?;
    let in_journal = ArticleFactory::new(db)
        .journal_id(journal.id)
        .published_date(days_after_base(2))
        .build()
        .await?;
    let orphan = ArticleFactory::new(db)
        .published_date(days_after_base(1))
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let result = repo.list(10, 0).await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].id, in_journal.id);
    assert_eq!(result[0].journal_name.as_deref(), Some(journal.name.as_str()));
    assert_eq!(result[1].id, orphan.id);
    assert!(result[1].journal_name.is_none());

    Ok(())
}

/// Tests the tie-break on identical publication dates.
///
/// Articles sharing a date are ordered by descending id.
///
/// Expected: Ok with the later-inserted article first
#[tokio::test]
async fn breaks_date_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_article(db, None).await?;
    let second = factory::create_article(db, None).await?;

    let repo = ArticleRepository::new(db);
    let result = repo.list(10, 0).await?;

    assert_eq!(result[0].id, second.id);
    assert_eq!(result[1].id, first.id);

    Ok(())
}

/// Tests that articles without a publication date follow all dated ones.
///
/// The undated article is inserted first so id ordering alone would not place it last.
///
/// Expected: Ok with the two dated articles newest first, then the undated one
#[tokio::test]
async fn sorts_undated_articles_last() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let undated = ArticleFactory::new(db).undated().build().await?;
    let older = ArticleFactory::new(db)
        .published_date(days_after_base(1))
        .build()
        .await?;
    let newer = ArticleFactory::new(db)
        .published_date(days_after_base(2))
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let result = repo.list(10, 0).await?;

    let ids: Vec<i32> = result.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![newer.id, older.id, undated.id]);
    assert!(result[2].published_date.is_none());

    Ok(())
}
