use crate::server::data::user::UserRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod ensure_anonymous;
mod find_by_id;
