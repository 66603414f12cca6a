//! Tag factory and article tagging helper.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Creates a tag with the given name.
///
/// # Returns
/// - `Ok(entity::tag::Model)` - Created tag entity
/// - `Err(DbErr)` - Database error (tag names are unique)
pub async fn create_named_tag(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::tag::Model, DbErr> {
    entity::tag::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a tag named `"tag-{id}"`.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    create_named_tag(db, format!("tag-{}", next_id())).await
}

/// Associates an existing tag with an existing article.
pub async fn tag_article(db: &DatabaseConnection, article_id: i32, tag_id: i32) -> Result<(), DbErr> {
    entity::prelude::ArticleTag::insert(entity::article_tag::ActiveModel {
        article_id: ActiveValue::Set(article_id),
        tag_id: ActiveValue::Set(tag_id),
    })
    .exec_without_returning(db)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::article::create_article};

    #[tokio::test]
    async fn tagging_links_article_and_tag() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_content_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let article = create_article(db, None).await?;
        let tag = create_named_tag(db, "ecology").await?;
        tag_article(db, article.id, tag.id).await?;

        let with_tags = entity::prelude::ArticleTag::find()
            .find_also_related(entity::prelude::Tag)
            .all(db)
            .await?;
        let with_articles = entity::prelude::ArticleTag::find()
            .find_also_related(entity::prelude::Article)
            .all(db)
            .await?;

        assert_eq!(with_tags.len(), 1);
        assert_eq!(with_tags[0].1.as_ref().map(|t| t.name.as_str()), Some("ecology"));
        assert_eq!(with_articles[0].1.as_ref().map(|a| a.id), Some(article.id));

        Ok(())
    }
}
