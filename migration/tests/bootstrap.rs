use migration::{Migrator, MigratorTrait, ANONYMOUS_USERNAME, ANONYMOUS_USER_ID};
use sea_orm_migration::sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

/// Tests bootstrapping a database that only has the content tables.
///
/// Expected: users and comments tables exist and hold exactly the anonymous user
#[tokio::test]
async fn creates_tables_and_seeds_anonymous_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    Migrator::up(db, None).await?;

    let users = entity::prelude::User::find().all(db).await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, ANONYMOUS_USER_ID);
    assert_eq!(users[0].username, ANONYMOUS_USERNAME);
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);

    Ok(())
}

/// Tests that running the bootstrapper twice changes nothing.
///
/// Expected: Ok on both runs, still exactly one user
#[tokio::test]
async fn second_run_is_a_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    Migrator::up(db, None).await?;
    Migrator::up(db, None).await?;

    assert_eq!(entity::prelude::User::find().count(db).await?, 1);
    assert!(Migrator::get_pending_migrations(db).await?.is_empty());

    Ok(())
}

/// Tests bootstrapping a database whose tables were created outside the migrator.
///
/// The create statements must tolerate existing tables and the seed must tolerate an
/// existing user row.
///
/// Expected: Ok, the pre-existing user row is kept unchanged
#[tokio::test]
async fn tolerates_existing_tables_and_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    test_utils::factory::user::UserFactory::new(db)
        .id(ANONYMOUS_USER_ID)
        .username("legacy")
        .build()
        .await?;

    Migrator::up(db, None).await?;

    let users = entity::prelude::User::find().all(db).await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "legacy");

    Ok(())
}
