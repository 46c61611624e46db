//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Access token signer built from configuration
//! - Random source used for dice draws

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::{roller::DiceRoller, token::TokenSigner};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<TokenSigner>` and `Arc<dyn DiceRoller>` are reference-counted pointers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Handlers open one transaction per request from it.
    pub db: DatabaseConnection,

    /// Signs and verifies access tokens.
    pub tokens: Arc<TokenSigner>,

    /// Uniform source for dice draws.
    ///
    /// Replaced by a scripted roller in tests.
    pub roller: Arc<dyn DiceRoller>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    pub fn new(db: DatabaseConnection, tokens: TokenSigner, roller: Arc<dyn DiceRoller>) -> Self {
        Self {
            db,
            tokens: Arc::new(tokens),
            roller,
        }
    }
}
