use crate::{model::api::PageQuery, server::error::AppError};

/// Validated offset/limit window for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u64,
    pub limit: u64,
}

impl Page {
    /// Validates the raw query and converts it into an unsigned window.
    ///
    /// # Returns
    /// - `Ok(Page)` - `offset >= 0` and `1 <= limit <= 100`
    /// - `Err(AppError::BadRequest)` - Either bound violated
    pub fn from_query(query: PageQuery) -> Result<Self, AppError> {
        query.validate().map_err(AppError::BadRequest)?;

        Ok(Self {
            offset: query.offset as u64,
            limit: query.limit as u64,
        })
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: crate::model::api::MAX_PAGE_LIMIT as u64,
        }
    }
}
