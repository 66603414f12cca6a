//! Database repository layer.
//!
//! Repository structs wrap a connection and perform the queries for one table each. They
//! use SeaORM entity models internally and return domain models from `server::model`, so
//! services never see entity types. Content tables (journals, articles, tags) are only
//! ever read; comments and users are the only tables written.

pub mod article;
pub mod comment;
pub mod user;

#[cfg(test)]
mod test;
