use sea_orm_migration::prelude::*;

use super::m20250110_000001_create_users_table::Users;

/// Primary key of the identity every comment is attributed to.
pub const ANONYMOUS_USER_ID: i32 = 1;
pub const ANONYMOUS_USERNAME: &str = "anonymous";
pub const ANONYMOUS_EMAIL: &str = "anonymous@example.com";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let insert = Query::insert()
            .into_table(Users::Table)
            .columns([Users::Id, Users::Username, Users::Email])
            .values([
                ANONYMOUS_USER_ID.into(),
                ANONYMOUS_USERNAME.into(),
                ANONYMOUS_EMAIL.into(),
            ])
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .on_conflict(OnConflict::column(Users::Id).do_nothing().to_owned())
            .to_owned();

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Users::Table)
            .and_where(Expr::col(Users::Id).eq(ANONYMOUS_USER_ID))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
