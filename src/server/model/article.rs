//! Article domain models and parameters.
//!
//! Articles are always read joined with their journal so `journal_name` is available
//! on every listing and detail view. A missing journal is not an error: the article is
//! returned with `journal_name: None`.

use chrono::NaiveDateTime;

use crate::model::{
    article::{ArticleDetailDto, ArticleDto, PaginatedArticlesDto, PaginationDto},
    pagination::PageRequest,
};

/// Article joined with its journal's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub title_zh: Option<String>,
    pub volume: Option<String>,
    pub pages: Option<String>,
    pub authors: Option<String>,
    pub published_date: Option<NaiveDateTime>,
    pub doi: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub summary_zh: Option<String>,
    pub journal_id: Option<i32>,
    pub image_url: Option<String>,
    pub journal_name: Option<String>,
}

impl Article {
    /// Converts an article entity and its optionally joined journal into a domain model.
    ///
    /// # Arguments
    /// - `entity` - The article row
    /// - `journal` - The journal row from the left join, if any
    pub fn from_entity(
        entity: entity::article::Model,
        journal: Option<entity::journal::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            title_zh: entity.title_zh,
            volume: entity.volume,
            pages: entity.pages,
            authors: entity.authors,
            published_date: entity.published_date,
            doi: entity.doi,
            link: entity.link,
            summary: entity.summary,
            summary_zh: entity.summary_zh,
            journal_id: entity.journal_id,
            image_url: entity.image_url,
            journal_name: journal.map(|j| j.name),
        }
    }

    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            id: self.id,
            title: self.title,
            title_zh: self.title_zh,
            volume: self.volume,
            pages: self.pages,
            authors: self.authors,
            published_date: self.published_date,
            doi: self.doi,
            link: self.link,
            summary: self.summary,
            summary_zh: self.summary_zh,
            journal_id: self.journal_id,
            image_url: self.image_url,
            journal_name: self.journal_name,
        }
    }
}

/// Article with the names of its tags.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDetail {
    pub article: Article,
    /// Tag names ordered alphabetically.
    pub tags: Vec<String>,
}

impl ArticleDetail {
    pub fn into_dto(self) -> ArticleDetailDto {
        ArticleDetailDto {
            article: self.article.into_dto(),
            tags: self.tags,
        }
    }
}

/// One page of articles with the count it was paginated against.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedArticles {
    /// Articles for this page, newest first.
    pub articles: Vec<Article>,
    /// Total number of matching articles across all pages.
    pub total: u64,
    /// Current page number (1-indexed).
    pub page: u64,
    /// Page size used for this read.
    pub per_page: u64,
    /// `ceil(total / per_page)`.
    pub total_pages: u64,
}

impl PaginatedArticles {
    pub fn into_dto(self) -> PaginatedArticlesDto {
        PaginatedArticlesDto {
            data: self.articles.into_iter().map(Article::into_dto).collect(),
            pagination: PaginationDto {
                current_page: self.page,
                per_page: self.per_page,
                total: self.total,
            },
        }
    }
}

/// Parameters for paginated article listings.
#[derive(Debug, Clone)]
pub struct GetArticlesParam {
    /// Restrict the listing to one journal; `None` lists every article.
    pub journal_id: Option<i32>,
    /// Already clamped page and page size.
    pub page: PageRequest,
}
