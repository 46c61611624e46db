use super::*;

/// Tests that a valid bearer token resolves to its user.
///
/// Expected: Ok(User) matching the token subject
#[tokio::test]
async fn resolves_token_subject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let tokens = signer();
    let token = tokens.issue(&user.email)?;

    let headers = headers(&format!("Bearer {}", token));
    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(result.is_ok());
    let principal = result.unwrap();
    assert_eq!(principal.id, user.id);
    assert_eq!(principal.email, user.email);

    Ok(())
}

/// Tests that the scheme is matched regardless of case.
///
/// Expected: Ok(User)
#[tokio::test]
async fn accepts_lowercase_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let tokens = signer();
    let token = tokens.issue(&user.email)?;

    let headers = headers(&format!("bearer {}", token));
    let principal = AuthGuard::new(db, &tokens, &headers).require().await?;

    assert_eq!(principal.id, user.id);

    Ok(())
}
