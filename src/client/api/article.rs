use crate::{
    client::model::error::ApiError,
    model::{
        article::{ArticleDetailDto, PaginatedArticlesDto},
        comment::CommentDto,
    },
};

use super::helper::{get, parse_response, send_request};

/// Fetches one page of articles, newest first.
pub async fn get_articles(page: u64, limit: u64) -> Result<PaginatedArticlesDto, ApiError> {
    let url = format!("/api/articles?page={}&limit={}", page, limit);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Fetches a single article with its tags.
pub async fn get_article(id: i32) -> Result<ArticleDetailDto, ApiError> {
    let url = format!("/api/articles/{}", id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Fetches the comments of an article, newest first.
pub async fn get_article_comments(id: i32) -> Result<Vec<CommentDto>, ApiError> {
    let url = format!("/api/articles/{}/comments", id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
