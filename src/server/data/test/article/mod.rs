use crate::server::data::article::ArticleRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count;
mod find_by_id;
mod get_tag_names;
mod list;
mod list_by_journal;
