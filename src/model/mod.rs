//! Data transfer objects and pure helpers shared by the server and the client.

pub mod api;
pub mod article;
pub mod comment;
pub mod pagination;
