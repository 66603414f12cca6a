use super::*;
use test_utils::factory::tag::create_named_tag;

/// Tests that tag names come back alphabetically.
///
/// Tags attached to other articles must not leak into the result.
///
/// Expected: Ok(vec!["ecology", "oceanography"])
#[tokio::test]
async fn returns_sorted_tag_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_article(db, None).await?;
    let other = factory::create_article(db, None).await?;
    let oceanography = create_named_tag(db, "oceanography").await?;
    let ecology = create_named_tag(db, "ecology").await?;
    let genetics = create_named_tag(db, "genetics").await?;

    factory::tag_article(db, article.id, oceanography.id).await?;
    factory::tag_article(db, article.id, ecology.id).await?;
    factory::tag_article(db, other.id, genetics.id).await?;

    let repo = ArticleRepository::new(db);
    let result = repo.get_tag_names(article.id).await?;

    assert_eq!(result, vec!["ecology".to_string(), "oceanography".to_string()]);

    Ok(())
}

/// Tests an article with no tags.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_for_untagged_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_article(db, None).await?;
    factory::create_tag(db).await?;

    let repo = ArticleRepository::new(db);
    let result = repo.get_tag_names(article.id).await?;

    assert!(result.is_empty());

    Ok(())
}
