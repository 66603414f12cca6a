//! Comment domain models and parameters.

use chrono::NaiveDateTime;

use crate::model::comment::CommentDto;

/// Comment joined with its author's username.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub article_id: i32,
    pub user_id: i32,
    pub content: String,
    pub created_at: NaiveDateTime,
    /// `None` only if the author row has disappeared since the comment was written.
    pub username: Option<String>,
}

impl Comment {
    /// Converts a comment entity into a domain model.
    ///
    /// # Arguments
    /// - `entity` - The comment row
    /// - `username` - Username from the joined user row, if any
    pub fn from_entity(entity: entity::comment::Model, username: Option<String>) -> Self {
        Self {
            id: entity.id,
            article_id: entity.article_id,
            user_id: entity.user_id,
            content: entity.content,
            created_at: entity.created_at,
            username,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            article_id: self.article_id,
            user_id: self.user_id,
            content: self.content,
            created_at: self.created_at,
            username: self.username,
        }
    }
}

/// Parameters for submitting a comment, as received from the form.
///
/// `content` is untrimmed; `CommentService::submit` trims and validates it.
#[derive(Debug, Clone)]
pub struct SubmitCommentParam {
    pub article_id: i32,
    pub content: Option<String>,
}
