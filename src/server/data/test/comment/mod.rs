use crate::server::data::comment::CommentRepository;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create_as_anonymous;
mod list_by_article;
