use super::*;

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_signature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let forger = TokenSigner::new("other-secret", Algorithm::HS256, Duration::minutes(30));
    let token = forger.issue(&user.email)?;

    let tokens = signer();
    let headers = headers(&format!("Bearer {}", token));
    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests an expired token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let stale = TokenSigner::new("guard-secret", Algorithm::HS256, Duration::minutes(-10));
    let token = stale.issue(&user.email)?;

    let tokens = signer();
    let headers = headers(&format!("Bearer {}", token));
    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a well-signed token whose subject has no account.
///
/// Expected: Err(AuthError::UnknownSubject)
#[tokio::test]
async fn rejects_unknown_subject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = signer();
    let token = tokens.issue("ghost@example.com")?;

    let headers = headers(&format!("Bearer {}", token));
    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownSubject(_)))
    ));

    Ok(())
}

/// Tests garbage in place of a token.
#[tokio::test]
async fn rejects_malformed_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = signer();
    let headers = headers("Bearer not.a.jwt");
    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
