use super::*;
use test_utils::factory::helpers::create_journal_with_articles;

/// Tests that only the requested journal's articles are returned.
///
/// Expected: Ok with the 2 articles of the first journal
#[tokio::test]
async fn filters_to_journal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (journal, articles) = create_journal_with_articles(db, 2).await?;
    create_journal_with_articles(db, 3).await?;

    let repo = ArticleRepository::new(db);
    let result = repo.list_by_journal(journal.id, 10, 0).await?;

    let ids: Vec<i32> = result.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![articles[1].id, articles[0].id]);
    assert!(result
        .iter()
        .all(|a| a.journal_name.as_deref() == Some(journal.name.as_str())));

    Ok(())
}

/// Tests that an unknown journal yields an empty page.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_for_unknown_journal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_journal_with_articles(db, 2).await?;

    let repo = ArticleRepository::new(db);
    let result = repo.list_by_journal(9999, 10, 0).await?;

    assert!(result.is_empty());

    Ok(())
}
