use super::*;
use test_utils::factory::helpers::create_journal_with_articles;

/// Tests counting all articles and one journal's articles.
///
/// Expected: total of 5, 2 in the first journal, 0 for an unknown journal
#[tokio::test]
async fn counts_all_and_by_journal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (journal, _) = create_journal_with_articles(db, 2).await?;
    create_journal_with_articles(db, 3).await?;

    let repo = ArticleRepository::new(db);

    assert_eq!(repo.count().await?, 5);
    assert_eq!(repo.count_by_journal(journal.id).await?, 2);
    assert_eq!(repo.count_by_journal(9999).await?, 0);

    Ok(())
}

/// Tests counting an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn counts_zero_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArticleRepository::new(db);

    assert_eq!(repo.count().await?, 0);

    Ok(())
}
