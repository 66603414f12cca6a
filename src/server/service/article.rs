use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, comment::CommentRepository},
    error::AppError,
    model::{
        article::{ArticleDetail, GetArticlesParam, PaginatedArticles},
        comment::Comment,
    },
};

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of articles, optionally restricted to a journal.
    ///
    /// The count and the page are read with the same filter so `total` and the page
    /// contents agree. No cross-request consistency is implied.
    ///
    /// # Arguments
    /// - `param` - Journal filter and clamped page request
    ///
    /// # Returns
    /// - `Ok(PaginatedArticles)` - The page plus totals
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        param: GetArticlesParam,
    ) -> Result<PaginatedArticles, AppError> {
        let repo = ArticleRepository::new(self.db);
        let page = param.page;

        let (articles, total) = match param.journal_id {
            Some(journal_id) => (
                repo.list_by_journal(journal_id, page.per_page, page.offset())
                    .await?,
                repo.count_by_journal(journal_id).await?,
            ),
            None => (
                repo.list(page.per_page, page.offset()).await?,
                repo.count().await?,
            ),
        };

        Ok(PaginatedArticles {
            articles,
            total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages(total),
        })
    }

    /// Gets a single article with its tag names.
    ///
    /// # Returns
    /// - `Ok(ArticleDetail)` - Article, journal name and tags
    /// - `Err(AppError::NotFound)` - No article with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_detail(&self, id: i32) -> Result<ArticleDetail, AppError> {
        let repo = ArticleRepository::new(self.db);

        let article = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Article not found".to_string()))?;
        let tags = repo.get_tag_names(id).await?;

        Ok(ArticleDetail { article, tags })
    }

    /// Gets the comments of an existing article, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Possibly empty list of comments
    /// - `Err(AppError::NotFound)` - No article with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_comments(&self, article_id: i32) -> Result<Vec<Comment>, AppError> {
        if !ArticleRepository::new(self.db).exists(article_id).await? {
            return Err(AppError::NotFound("Article not found".to_string()));
        }

        let comments = CommentRepository::new(self.db)
            .list_by_article(article_id)
            .await?;

        Ok(comments)
    }
}
