use super::*;
use chrono::Utc;
use test_utils::factory::user::UserFactory;

/// Tests inserting a comment when the anonymous user does not exist yet.
///
/// The user row is created in the same transaction and the comment is attributed to it.
///
/// Expected: Ok with one comment row owned by user 1
#[tokio::test]
async fn inserts_comment_and_anonymous_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_article(db, None).await?;
    let started = Utc::now().naive_utc() - chrono::Duration::seconds(1);

    let repo = CommentRepository::new(db);
    let comment = repo
        .create_as_anonymous(article.id, "Great read!".to_string())
        .await?;

    assert_eq!(comment.article_id, article.id);
    assert_eq!(comment.user_id, 1);
    assert_eq!(comment.content, "Great read!");
    assert_eq!(comment.username.as_deref(), Some("anonymous"));
    assert!(comment.created_at >= started);

    let stored = entity::prelude::Comment::find()
        .filter(entity::comment::Column::ArticleId.eq(article.id))
        .all(db)
        .await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].user_id, 1);

    let user = entity::prelude::User::find_by_id(1).one(db).await?;
    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.username, "anonymous");
    assert_eq!(user.email.as_deref(), Some("anonymous@example.com"));

    Ok(())
}

/// Tests that an existing user with id 1 is reused rather than replaced.
///
/// Expected: Ok, user row unchanged, still exactly one user
#[tokio::test]
async fn reuses_existing_user_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let article = factory::create_article(db, None).await?;
    UserFactory::new(db).id(1).username("guest").build().await?;

    let repo = CommentRepository::new(db);
    repo.create_as_anonymous(article.id, "first".to_string())
        .await?;
    repo.create_as_anonymous(article.id, "second".to_string())
        .await?;

    assert_eq!(entity::prelude::User::find().count(db).await?, 1);
    let user = entity::prelude::User::find_by_id(1).one(db).await?.unwrap();
    assert_eq!(user.username, "guest");
    assert_eq!(
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.eq(article.id))
            .count(db)
            .await?,
        2
    );

    Ok(())
}

/// Tests that a comment on a missing article rolls back the whole transaction.
///
/// The foreign key violation must leave neither a comment nor the anonymous user behind.
///
/// Expected: Err(DbErr), no comment rows, no user rows
#[tokio::test]
async fn rolls_back_on_missing_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let result = repo
        .create_as_anonymous(999999, "orphan".to_string())
        .await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}
