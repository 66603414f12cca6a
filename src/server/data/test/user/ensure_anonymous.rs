use super::*;

/// Tests that the anonymous user is created when absent.
///
/// Expected: Ok, one user row with id 1 and username "anonymous"
#[tokio::test]
async fn creates_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.ensure_anonymous().await?;

    let user = repo.find_by_id(1).await?;
    assert!(user.is_some());
    assert_eq!(user.unwrap().username, "anonymous");

    Ok(())
}

/// Tests that repeated calls do not duplicate or fail.
///
/// Expected: Ok on every call, exactly one user row
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.ensure_anonymous().await?;
    repo.ensure_anonymous().await?;
    repo.ensure_anonymous().await?;

    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}
