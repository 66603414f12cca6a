//! SeaORM entities for the journal database.
//!
//! `journals`, `articles`, `tags` and `article_tags` are written by the ingestion
//! pipeline and only read by this application. `users` and `comments` are owned here
//! and created by the migrations in the `migration` crate.

pub mod prelude;

pub mod article;
pub mod article_tag;
pub mod comment;
pub mod journal;
pub mod tag;
pub mod user;
