//! Factory methods for creating test data.
//!
//! Each table has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories take the
//! foreign keys they need as constructor arguments, so dependencies are explicit.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let journal = factory::create_journal(&db).await?;
//! let article = factory::create_article(&db, Some(journal.id)).await?;
//!
//! let article = factory::article::ArticleFactory::new(&db)
//!     .journal_id(journal.id)
//!     .title("Deep Sea Vents")
//!     .build()
//!     .await?;
//! ```

pub mod article;
pub mod comment;
pub mod helpers;
pub mod journal;
pub mod tag;
pub mod user;

pub use article::create_article;
pub use comment::create_comment;
pub use journal::create_journal;
pub use tag::{create_tag, tag_article};
pub use user::create_user;
