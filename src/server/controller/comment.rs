use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    Form,
};

use crate::{
    model::{api::ErrorDto, comment::CommentFormDto},
    server::{
        error::AppError, model::comment::SubmitCommentParam,
        service::comment::CommentService, state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Post an anonymous comment on an article.
///
/// Accepts a URL-encoded form so a plain HTML `<form>` can submit it, and redirects
/// back to the article page on success.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Article id
/// - `form` - Form body with the `content` field
///
/// # Returns
/// - `303 See Other` - Comment stored, redirect to `/articles/{id}`
/// - `400 Bad Request` - Content missing or blank
/// - `500 Internal Server Error` - Write failed and was rolled back
#[utoipa::path(
    post,
    path = "/articles/{id}/comments",
    tag = COMMENT_TAG,
    params(
        ("id" = i32, Path, description = "Article id")
    ),
    request_body(content = CommentFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Comment stored, redirect to the article page"),
        (status = 400, description = "Comment content is empty", body = ErrorDto),
        (status = 500, description = "Failed to add comment", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<CommentFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CommentService::new(&state.db);

    service
        .submit(SubmitCommentParam {
            article_id: id,
            content: form.content,
        })
        .await?;

    Ok(Redirect::to(&format!("/articles/{}", id)))
}
