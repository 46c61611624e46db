//! Roll history: append with bounded retention, owner-scoped reads and deletes.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::dice_log::DiceLogRepository,
    error::AppError,
    model::{
        dice_log::{DiceLog, DiceLogFilter, NewDiceLog, MAX_LOGS_PER_USER},
        page::Page,
        user::User,
    },
    service::ensure_owner,
};

pub struct DiceLogService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DiceLogService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a roll and evicts the user's oldest entries beyond the retention limit.
    ///
    /// Both writes happen on the caller's connection so the history never commits
    /// above the limit when requests are serialized.
    pub async fn record(&self, log: NewDiceLog) -> Result<DiceLog, AppError> {
        let repo = DiceLogRepository::new(self.db);

        let user_id = log.user_id;
        let entry = repo.append(log).await?;

        if repo.count_by_user(user_id).await? > MAX_LOGS_PER_USER {
            let evicted = repo.trim_user_history(user_id, MAX_LOGS_PER_USER).await?;
            tracing::debug!("Evicted {} old roll(s) for user {}", evicted, user_id);
        }

        Ok(entry)
    }

    pub async fn get(&self, id: i32, principal: &User) -> Result<DiceLog, AppError> {
        let log = DiceLogRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Dice log not found".to_string()))?;

        ensure_owner("dice log", id, log.user_id, principal)?;

        Ok(log)
    }

    pub async fn list(&self, filter: DiceLogFilter, page: Page) -> Result<Vec<DiceLog>, AppError> {
        Ok(DiceLogRepository::new(self.db).list(filter, page).await?)
    }

    pub async fn delete(&self, id: i32, principal: &User) -> Result<(), AppError> {
        let log = self.get(id, principal).await?;

        DiceLogRepository::new(self.db).delete(log.id).await?;

        tracing::info!("User {} deleted dice log {}", principal.id, log.id);

        Ok(())
    }
}
