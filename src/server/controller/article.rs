use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        article::{ArticleDetailDto, PaginatedArticlesDto},
        comment::CommentDto,
        pagination::{PageRequest, DEFAULT_PER_PAGE},
    },
    server::{
        error::AppError, model::article::GetArticlesParam, service::article::ArticleService,
        state::AppState,
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

/// Raw pagination query.
///
/// Kept as strings so malformed values fall back to defaults instead of rejecting the
/// request.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// 1-indexed page number, defaults to 1
    pub page: Option<String>,
    /// Page size, defaults to 10, capped at 100
    pub limit: Option<String>,
}

impl PaginationQuery {
    fn page_request(&self) -> PageRequest {
        PageRequest::parse(
            self.page.as_deref(),
            self.limit.as_deref(),
            DEFAULT_PER_PAGE,
        )
    }
}

/// List articles, newest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `page` and `limit`
///
/// # Returns
/// - `200 OK` - Page of articles with pagination summary
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Page of articles", body = PaginatedArticlesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_articles(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);

    let articles = service
        .get_paginated(GetArticlesParam {
            journal_id: None,
            page: query.page_request(),
        })
        .await?;

    Ok((StatusCode::OK, Json(articles.into_dto())))
}

/// Get a single article with its tags.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Article id
///
/// # Returns
/// - `200 OK` - Article with journal name and `tags` array
/// - `404 Not Found` - No article with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    tag = ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "Article id")
    ),
    responses(
        (status = 200, description = "Article with tags", body = ArticleDetailDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);

    let article = service.get_detail(id).await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// List the comments of an article, newest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Article id
///
/// # Returns
/// - `200 OK` - Comments with usernames, possibly empty
/// - `404 Not Found` - No article with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{id}/comments",
    tag = ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "Article id")
    ),
    responses(
        (status = 200, description = "Comments newest first", body = Vec<CommentDto>),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_comments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);

    let comments: Vec<CommentDto> = service
        .get_comments(id)
        .await?
        .into_iter()
        .map(|comment| comment.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(comments)))
}

/// List a journal's articles, newest first.
///
/// An unknown journal yields an empty page, not a 404.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `journal_id` - Journal id
/// - `query` - Optional `page` and `limit`
///
/// # Returns
/// - `200 OK` - Page of the journal's articles with pagination summary
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/journals/{journal_id}/articles",
    tag = ARTICLE_TAG,
    params(
        ("journal_id" = i32, Path, description = "Journal id"),
        PaginationQuery
    ),
    responses(
        (status = 200, description = "Page of the journal's articles", body = PaginatedArticlesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_journal_articles(
    State(state): State<AppState>,
    Path(journal_id): Path<i32>,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ArticleService::new(&state.db);

    let articles = service
        .get_paginated(GetArticlesParam {
            journal_id: Some(journal_id),
            page: query.page_request(),
        })
        .await?;

    Ok((StatusCode::OK, Json(articles.into_dto())))
}
