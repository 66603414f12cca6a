use super::*;

/// Tests finding a stored user.
///
/// Expected: Ok(Some(User)) matching the created row
#[tokio::test]
async fn finds_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(created.id).await?;

    assert!(result.is_some());
    let user = result.unwrap();
    assert_eq!(user.username, created.username);
    assert_eq!(user.email, created.email);

    Ok(())
}

/// Tests a missing id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(42).await?.is_none());

    Ok(())
}
