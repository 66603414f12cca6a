use super::*;
use test_utils::factory::article::ArticleFactory;

/// Tests finding an existing article with all its columns.
///
/// Expected: Ok(Some(Article)) with translated fields and journal name
#[tokio::test]
async fn finds_existing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let journal = factory::create_journal(db).await?;
    let article = ArticleFactory::new(db)
        .journal_id(journal.id)
        .title("Deep Sea Vents")
        .translation("深海热泉", "摘要")
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let result = repo.find_by_id(article.id).await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.title, "Deep Sea Vents");
    assert_eq!(found.title_zh.as_deref(), Some("深海热泉"));
    assert_eq!(found.summary_zh.as_deref(), Some("摘要"));
    assert_eq!(found.journal_name, Some(journal.name));

    Ok(())
}

/// Tests finding an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);
    let result = repo.find_by_id(999999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the existence check.
///
/// Expected: true for a created article, false otherwise
#[tokio::test]
async fn reports_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_article(db, None).await?;

    let repo = ArticleRepository::new(db);

    assert!(repo.exists(article.id).await?);
    assert!(!repo.exists(article.id + 1).await?);

    Ok(())
}
