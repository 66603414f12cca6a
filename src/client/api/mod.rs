#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod article;

#[cfg(feature = "web")]
pub use article::{get_article, get_article_comments, get_articles};
