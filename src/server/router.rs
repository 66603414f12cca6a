use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        article::{ArticleDetailDto, ArticleDto, PaginatedArticlesDto, PaginationDto},
        comment::{CommentDto, CommentFormDto},
    },
    server::{
        controller::{
            article::{
                self, get_article, get_article_comments, get_articles, get_journal_articles,
            },
            comment::{self, create_comment},
            health::{self, get_health},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Journalboard API", description = "Article listings and anonymous comments"),
    paths(
        health::get_health,
        article::get_articles,
        article::get_article,
        article::get_article_comments,
        article::get_journal_articles,
        comment::create_comment,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        ArticleDto,
        ArticleDetailDto,
        PaginationDto,
        PaginatedArticlesDto,
        CommentDto,
        CommentFormDto,
    )),
    tags(
        (name = health::HEALTH_TAG, description = "Service health"),
        (name = article::ARTICLE_TAG, description = "Article listings and details"),
        (name = comment::COMMENT_TAG, description = "Comment submission"),
    )
)]
pub struct ApiDoc;

/// Builds the JSON API, the comment form endpoint and the Swagger UI.
///
/// CORS is permissive: any origin may read the API.
pub fn router() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(get_health))
        .route("/api/articles", get(get_articles))
        .route("/api/articles/{id}", get(get_article))
        .route("/api/articles/{id}/comments", get(get_article_comments))
        .route("/api/journals/{journal_id}/articles", get(get_journal_articles))
        .route("/articles/{id}/comments", post(create_comment))
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
}
