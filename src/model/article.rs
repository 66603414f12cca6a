use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::pagination::total_pages;

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Article row joined with the name of its journal.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ArticleDto {
    pub id: i32,
    pub title: String,
    pub title_zh: Option<String>,
    pub volume: Option<String>,
    pub pages: Option<String>,
    /// JSON-encoded array of author names, as stored.
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

impl ArticleDto {
    /// Title in the requested language, falling back to the original title.
    pub fn display_title(&self, chinese: bool) -> &str {
        match (&self.title_zh, chinese) {
            (Some(title_zh), true) if !title_zh.trim().is_empty() => title_zh,
            _ => &self.title,
        }
    }

    /// Summary in the requested language, falling back to the original summary.
    pub fn display_summary(&self, chinese: bool) -> Option<&str> {
        match (&self.summary_zh, chinese) {
            (Some(summary_zh), true) if !summary_zh.trim().is_empty() => Some(summary_zh),
            _ => self.summary.as_deref(),
        }
    }

    /// Parses the stored author list, returning an empty list for missing or malformed data.
    pub fn author_names(&self) -> Vec<String> {
        self.authors
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
            .unwrap_or_default()
    }
}

/// Single article with its tag names appended.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ArticleDetailDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaginationDto {
    pub current_page: u64,
    pub per_page: u64,
    pub total: u64,
}

impl PaginationDto {
    /// Number of pages implied by `total` and `per_page`.
    pub fn total_pages(&self) -> u64 {
        total_pages(self.total, self.per_page)
    }

    /// 1-indexed positions of the first and last row on this page, `(0, 0)` when the
    /// page is empty or past the end.
    pub fn showing_range(&self) -> (u64, u64) {
        let offset = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.per_page);
        if offset >= self.total {
            return (0, 0);
        }
        let last = offset.saturating_add(self.per_page).min(self.total);

        (offset.saturating_add(1), last)
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PaginatedArticlesDto {
    pub data: Vec<ArticleDto>,
    pub pagination: PaginationDto,
}
