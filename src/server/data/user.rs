use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, DbErr, EntityTrait,
};

use crate::server::model::user::{SentinelUser, User, ANONYMOUS_USER};

/// Repository for the `users` table.
///
/// Generic over the connection so it can run inside the comment transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Ensures the anonymous user row exists.
    ///
    /// Equivalent to `INSERT ... ON CONFLICT (id) DO NOTHING`. An existing row with the
    /// same id is left untouched, whatever its username and email.
    pub async fn ensure_anonymous(&self) -> Result<(), DbErr> {
        self.ensure_sentinel(&ANONYMOUS_USER).await
    }

    /// Inserts a sentinel user unless a row with its id already exists.
    ///
    /// # Returns
    /// - `Ok(())` - The row exists after the call
    /// - `Err(DbErr)` - Database error
    pub async fn ensure_sentinel(&self, user: &SentinelUser) -> Result<(), DbErr> {
        entity::prelude::User::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(user.id),
            username: ActiveValue::Set(user.username.to_string()),
            email: ActiveValue::Set(Some(user.email.to_string())),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Id)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Finds a user by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }
}
