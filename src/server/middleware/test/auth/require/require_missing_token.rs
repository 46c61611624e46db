use super::*;

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = signer();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests that other schemes and empty credentials count as missing.
///
/// Expected: Err(AuthError::MissingToken) for each header
#[tokio::test]
async fn rejects_non_bearer_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tokens = signer();

    for value in ["Basic YWRhOnB3", "Bearer", "Bearer   ", "token-without-scheme"] {
        let headers = headers(value);
        let result = AuthGuard::new(db, &tokens, &headers).require().await;

        assert!(
            matches!(result, Err(AppError::AuthErr(AuthError::MissingToken))),
            "header {:?}",
            value
        );
    }

    Ok(())
}
