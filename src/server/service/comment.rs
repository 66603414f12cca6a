use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::comment::CommentRepository,
    error::{comment::CommentError, AppError},
    model::comment::{Comment, SubmitCommentParam},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores an anonymous comment.
    ///
    /// Content is trimmed first; empty or whitespace-only content is rejected without
    /// touching the database. The write itself is a single transaction that also
    /// ensures the anonymous user exists.
    ///
    /// # Arguments
    /// - `param` - Target article id and raw form content
    ///
    /// # Returns
    /// - `Ok(Comment)` - The stored comment
    /// - `Err(AppError::CommentErr(EmptyContent))` - Content missing or blank
    /// - `Err(AppError::CommentErr(WriteFailed))` - Transaction rolled back
    pub async fn submit(&self, param: SubmitCommentParam) -> Result<Comment, AppError> {
        let content = param
            .content
            .as_deref()
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .ok_or(CommentError::EmptyContent)?;

        let comment = CommentRepository::new(self.db)
            .create_as_anonymous(param.article_id, content.to_string())
            .await
            .map_err(|err| write_failed(param.article_id, err))?;

        tracing::debug!(
            "Stored comment {} on article {}",
            comment.id,
            comment.article_id
        );

        Ok(comment)
    }
}

fn write_failed(article_id: i32, source: DbErr) -> CommentError {
    if let Some(SqlErr::ForeignKeyConstraintViolation(detail)) = source.sql_err() {
        tracing::warn!(
            "Comment rejected, article {} does not exist: {}",
            article_id,
            detail
        );
    }

    CommentError::WriteFailed { article_id, source }
}
