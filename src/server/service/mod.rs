//! Business logic layer.
//!
//! Services sit between controllers and repositories. They enforce ownership, the
//! per-parent cardinality caps and uniqueness rules, run cascading deletes and evaluate
//! dice rolls. Every service borrows a `ConnectionTrait` implementor; handlers pass the
//! request's transaction so all reads and writes of one request commit or roll back
//! together.

pub mod auth;
pub mod campaign;
pub mod cascade;
pub mod character;
pub mod dice;
pub mod dice_log;
pub mod dice_set;
pub mod password;
pub mod roller;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

use crate::server::{error::AppError, model::user::User};

/// Rejects access unless `principal` owns the entity.
///
/// Logs the attempt at warn level and returns a Forbidden error that does not reveal
/// anything about the entity.
pub(crate) fn ensure_owner(
    kind: &str,
    id: i32,
    owner_id: i32,
    principal: &User,
) -> Result<(), AppError> {
    if owner_id == principal.id {
        return Ok(());
    }

    tracing::warn!(
        "User {} denied access to {} {} owned by user {}",
        principal.id,
        kind,
        id,
        owner_id
    );

    Err(AppError::not_allowed())
}

/// Maps a unique-index violation to a Conflict carrying `message`.
///
/// Uniqueness is pre-checked before writing, but a concurrent request can still insert
/// the same value between the check and the write; the index then has the last word.
pub(crate) fn conflict_on_duplicate(message: &str) -> impl Fn(DbErr) -> AppError + '_ {
    move |err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::Conflict(message.to_string()),
        _ => AppError::DbErr(err),
    }
}
