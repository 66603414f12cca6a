use sea_orm::{
    sea_query::NullOrdering, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
    SelectTwo,
};

use crate::server::model::article::Article;

pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of articles joined with their journal name.
    ///
    /// Articles are ordered newest first by publication date; articles without a date
    /// sort after all dated ones, and ties are broken by descending id so page
    /// boundaries are stable.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of articles to return
    /// - `offset` - Number of articles to skip
    ///
    /// # Returns
    /// - `Ok(Vec<Article>)` - Up to `limit` articles, empty when `offset` is past the end
    /// - `Err(DbErr)` - Database error
    pub async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Article>, DbErr> {
        let rows = newest_first(entity::prelude::Article::find())
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(article, journal)| Article::from_entity(article, journal))
            .collect())
    }

    /// Gets one page of a single journal's articles, ordered as in `list`.
    ///
    /// An unknown journal id yields an empty page rather than an error.
    pub async fn list_by_journal(
        &self,
        journal_id: i32,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Article>, DbErr> {
        let rows = newest_first(
            entity::prelude::Article::find()
                .filter(entity::article::Column::JournalId.eq(journal_id)),
        )
        .limit(limit)
        .offset(offset)
        .all(self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(article, journal)| Article::from_entity(article, journal))
            .collect())
    }

    /// Counts all articles.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Article::find().count(self.db).await
    }

    /// Counts the articles belonging to one journal.
    pub async fn count_by_journal(&self, journal_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Article::find()
            .filter(entity::article::Column::JournalId.eq(journal_id))
            .count(self.db)
            .await
    }

    /// Finds a single article by id, joined with its journal name.
    ///
    /// # Returns
    /// - `Ok(Some(Article))` - Article found
    /// - `Ok(None)` - No article with that id
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Article>, DbErr> {
        let row = entity::prelude::Article::find_by_id(id)
            .find_also_related(entity::prelude::Journal)
            .one(self.db)
            .await?;

        Ok(row.map(|(article, journal)| Article::from_entity(article, journal)))
    }

    /// Checks whether an article with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Article::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the names of all tags attached to an article, alphabetically.
    ///
    /// Returns an empty vector for untagged or unknown articles.
    pub async fn get_tag_names(&self, article_id: i32) -> Result<Vec<String>, DbErr> {
        let tags = entity::prelude::Tag::find()
            .join(JoinType::InnerJoin, entity::tag::Relation::ArticleTag.def())
            .filter(entity::article_tag::Column::ArticleId.eq(article_id))
            .order_by_asc(entity::tag::Column::Name)
            .all(self.db)
            .await?;

        Ok(tags.into_iter().map(|tag| tag.name).collect())
    }
}

/// Joins the journal and applies the listing order.
fn newest_first(
    select: Select<entity::article::Entity>,
) -> SelectTwo<entity::article::Entity, entity::journal::Entity> {
    select
        .find_also_related(entity::prelude::Journal)
        .order_by_with_nulls(
            entity::article::Column::PublishedDate,
            Order::Desc,
            NullOrdering::Last,
        )
        .order_by_desc(entity::article::Column::Id)
}
