//! HTTP request handlers.
//!
//! Controllers extract path, query and form input, build service parameters, call the
//! service layer and convert domain models to DTOs. Every handler returns
//! `Result<_, AppError>` so failures are mapped to status codes in one place.

pub mod article;
pub mod comment;
pub mod health;

#[cfg(test)]
mod test;
