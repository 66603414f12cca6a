use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::user::UserRepository,
    model::{comment::Comment, user::ANONYMOUS_USER},
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all comments on an article with their author's username, newest first.
    ///
    /// Ties on `created_at` are broken by descending id. An unknown article yields an
    /// empty vector.
    pub async fn list_by_article(&self, article_id: i32) -> Result<Vec<Comment>, DbErr> {
        let rows = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(comment, user)| Comment::from_entity(comment, user.map(|u| u.username)))
            .collect())
    }

    /// Inserts a comment attributed to the anonymous user.
    ///
    /// Runs in a single transaction: the anonymous user is upserted, then the comment is
    /// inserted with the current time. If either statement fails the transaction is
    /// rolled back, so neither the user row nor the comment is left behind. Content is
    /// stored as given; validation belongs to the caller.
    ///
    /// # Arguments
    /// - `article_id` - Article the comment belongs to; must reference an existing row
    /// - `content` - Comment text
    ///
    /// # Returns
    /// - `Ok(Comment)` - The stored comment, with the anonymous username attached
    /// - `Err(DbErr)` - Foreign key violation for unknown articles, or any database error
    pub async fn create_as_anonymous(
        &self,
        article_id: i32,
        content: String,
    ) -> Result<Comment, DbErr> {
        let txn = self.db.begin().await?;

        match insert_anonymous_comment(&txn, article_id, content).await {
            Ok(comment) => {
                txn.commit().await?;
                Ok(comment)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!(
                        "Rollback of comment on article {} failed: {}",
                        article_id,
                        rollback_err
                    );
                }
                Err(err)
            }
        }
    }
}

async fn insert_anonymous_comment<C: ConnectionTrait>(
    db: &C,
    article_id: i32,
    content: String,
) -> Result<Comment, DbErr> {
    UserRepository::new(db).ensure_anonymous().await?;

    let comment = entity::comment::ActiveModel {
        article_id: ActiveValue::Set(article_id),
        user_id: ActiveValue::Set(ANONYMOUS_USER.id),
        content: ActiveValue::Set(content),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(Comment::from_entity(
        comment,
        Some(ANONYMOUS_USER.username.to_string()),
    ))
}
