//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records: registration
//! inserts, login lookups by name or email, uniqueness checks, filtered listing, profile
//! updates and the final delete step of an account cascade.

use chrono::Utc;
use sea_orm::{
    sea_query::Condition, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    page::Page,
    user::{CreateUserParams, User, UserChanges, UserFilter},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique index violations
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            user_name: ActiveValue::Set(params.user_name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email, the subject carried in access tokens.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user whose email OR name equals `identifier`.
    ///
    /// An email match wins over a name match so an address can never be shadowed by
    /// another account's user name.
    pub async fn find_by_login(&self, identifier: &str) -> Result<Option<User>, DbErr> {
        if let Some(user) = self.find_by_email(identifier).await? {
            return Ok(Some(user));
        }

        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::UserName.eq(identifier))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks in one query whether another user already holds the name or email.
    ///
    /// Each value is compared against both columns, since login accepts either one and
    /// a name equal to someone's email would make that login ambiguous.
    ///
    /// # Arguments
    /// - `user_name` - Name to check, skipped when `None`
    /// - `email` - Email to check, skipped when `None`
    /// - `exclude_id` - User to ignore, used when a user re-submits their own values
    ///
    /// # Returns
    /// - `Ok(true)` - A different user holds at least one of the values
    /// - `Ok(false)` - Both values are free, or neither was supplied
    pub async fn is_taken(
        &self,
        user_name: Option<&str>,
        email: Option<&str>,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        if user_name.is_none() && email.is_none() {
            return Ok(false);
        }

        let mut any = Condition::any();
        for value in [user_name, email].into_iter().flatten() {
            any = any
                .add(entity::user::Column::UserName.eq(value))
                .add(entity::user::Column::Email.eq(value));
        }
        let mut query = entity::prelude::User::find().filter(any);
        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(exclude_id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Lists users ordered by id, optionally filtered by a name substring.
    pub async fn list(&self, filter: UserFilter, page: Page) -> Result<Vec<User>, DbErr> {
        let mut query = entity::prelude::User::find();
        if let Some(user_name) = filter.user_name.filter(|s| !s.is_empty()) {
            query = query.filter(entity::user::Column::UserName.contains(user_name));
        }

        let entities = query
            .order_by_asc(entity::user::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Applies the given column changes, leaving `None` fields untouched.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that id
    pub async fn update(&self, id: i32, changes: UserChanges) -> Result<User, DbErr> {
        let entity = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("User with id {} not found", id)))?;

        let mut active: entity::user::ActiveModel = entity.into();
        if let Some(user_name) = changes.user_name {
            active.user_name = ActiveValue::Set(user_name);
        }
        if let Some(email) = changes.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = changes.password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }

        let entity = active.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Deletes a user row.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows affected, 0 when the user did not exist
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
