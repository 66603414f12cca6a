use super::*;
use test_utils::factory::{comment::CommentFactory, helpers::days_after_base};

/// Tests that comments are listed newest first with usernames.
///
/// Expected: Ok with the newer comment first, both carrying the author's username
#[tokio::test]
async fn lists_newest_first_with_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_article(db, None).await?;
    let user = factory::create_user(db).await?;
    let older = CommentFactory::new(db, article.id, user.id)
        .content("first")
        .created_at(days_after_base(1))
        .build()
        .await?;
    let newer = CommentFactory::new(db, article.id, user.id)
        .content("second")
        .created_at(days_after_base(2))
        .build()
        .await?;

    let repo = CommentRepository::new(db);
    let result = repo.list_by_article(article.id).await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].id, newer.id);
    assert_eq!(result[1].id, older.id);
    assert!(result
        .iter()
        .all(|c| c.username.as_deref() == Some(user.username.as_str())));

    Ok(())
}

/// Tests that comments on other articles are excluded.
///
/// Expected: Ok with only the target article's comment
#[tokio::test]
async fn excludes_other_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_article(db, None).await?;
    let other = factory::create_article(db, None).await?;
    let user = factory::create_user(db).await?;
    let comment = factory::create_comment(db, article.id, user.id).await?;
    factory::create_comment(db, other.id, user.id).await?;

    let repo = CommentRepository::new(db);
    let result = repo.list_by_article(article.id).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, comment.id);
    assert_eq!(result[0].content, comment.content);

    Ok(())
}

/// Tests an article without comments.
///
/// Expected: Ok(vec![])
#[tokio::test]
async fn returns_empty_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_article(db, None).await?;

    let repo = CommentRepository::new(db);
    let result = repo.list_by_article(article.id).await?;

    assert!(result.is_empty());

    Ok(())
}
