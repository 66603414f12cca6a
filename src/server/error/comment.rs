use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum CommentError {
    /// Submitted content is empty or whitespace only.
    ///
    /// Raised before any database work, so nothing is written. Results in a
    /// 400 Bad Request response.
    #[error("Comment content cannot be empty")]
    EmptyContent,

    /// The comment transaction failed and was rolled back.
    ///
    /// Covers foreign-key violations (unknown article), connection loss and pool
    /// exhaustion during BEGIN/INSERT/COMMIT. Results in a 500 response; the underlying
    /// database error is logged but never returned to the client.
    #[error("Failed to write comment for article {article_id}: {source}")]
    WriteFailed {
        article_id: i32,
        #[source]
        source: sea_orm::DbErr,
    },
}

/// Converts comment errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `EmptyContent`
/// - 500 Internal Server Error - For `WriteFailed`, with the cause logged server-side
impl IntoResponse for CommentError {
    fn into_response(self) -> Response {
        match self {
            Self::EmptyContent => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::WriteFailed { .. } => {
                tracing::error!("{}", self);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Failed to add comment. Please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
