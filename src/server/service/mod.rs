//! Business logic layer.
//!
//! Services compose repository calls into the results the controllers return and turn
//! missing rows into `AppError::NotFound`. They borrow the connection pool for the
//! duration of one request and hold no state of their own.

pub mod article;
pub mod comment;
