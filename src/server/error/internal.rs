use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A cascade step deleted fewer rows than it had just loaded.
    ///
    /// Means the ownership tree changed underneath the transaction or references are
    /// broken. Results in a 500 Internal Server Error and a rollback.
    #[error("Cascade integrity violated deleting {table} rows under parent {parent_id}")]
    CascadeIntegrity {
        /// Table the short delete ran against
        table: &'static str,
        /// Id of the entity whose children were being removed
        parent_id: i32,
    },

    /// Argon2 failed to produce a hash.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Token encoding failed, typically an unusable signing key.
    #[error("Failed to sign access token: {0}")]
    TokenEncode(#[source] jsonwebtoken::errors::Error),
}
