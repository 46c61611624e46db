//! Account reads and self-service profile changes.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        page::Page,
        user::{UpdateUserParams, User, UserChanges, UserFilter},
    },
    service::{
        auth::DUPLICATE_ACCOUNT, cascade::CascadeService, conflict_on_duplicate,
        password::hash_password,
    },
};

pub struct UserService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn list(&self, filter: UserFilter, page: Page) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).list(filter, page).await?)
    }

    /// Applies a profile patch to the principal's own account.
    ///
    /// A new name or email must not belong to another user; a new password is re-hashed.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated account
    /// - `Err(AppError::Conflict)` - Name or email held by someone else
    pub async fn update_me(
        &self,
        principal: &User,
        params: UpdateUserParams,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo
            .is_taken(
                params.user_name.as_deref(),
                params.email.as_deref(),
                Some(principal.id),
            )
            .await?
        {
            tracing::warn!("User {} profile update rejected, name or email taken", principal.id);
            return Err(AppError::Conflict(DUPLICATE_ACCOUNT.to_string()));
        }

        let password_hash = params
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        let user = repo
            .update(
                principal.id,
                UserChanges {
                    user_name: params.user_name,
                    email: params.email,
                    password_hash,
                },
            )
            .await
            .map_err(conflict_on_duplicate(DUPLICATE_ACCOUNT))?;

        tracing::info!("User {} updated their profile", user.id);

        Ok(user)
    }

    /// Deletes the principal's account and everything it owns.
    pub async fn delete_me(&self, principal: &User) -> Result<(), AppError> {
        CascadeService::new(self.db).delete_user(principal.id).await?;

        tracing::info!("User {} deleted their account", principal.id);

        Ok(())
    }
}
