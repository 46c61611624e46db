use chrono::Duration;
use jsonwebtoken::Algorithm;
use sea_orm::DatabaseConnection;
use test_utils::factory;

use crate::server::{model::user::User, service::token::TokenSigner};


fn signer() -> TokenSigner {
    TokenSigner::new("test-secret", Algorithm::HS256, Duration::minutes(30))
}

/// Inserts a user through the factory and returns it as a principal.
async fn principal(db: &DatabaseConnection) -> Result<User, sea_orm::DbErr> {
    Ok(User::from_entity(factory::user::create_user(db).await?))
}
