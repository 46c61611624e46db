use super::*;

/// Tests that either a clashing name or a clashing email counts as taken.
#[tokio::test]
async fn detects_name_or_email_clash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_name("ada")
        .email("ada@x.io")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.is_taken(Some("ada"), Some("new@x.io"), None).await?);
    assert!(repo.is_taken(Some("new"), Some("ada@x.io"), None).await?);
    assert!(!repo.is_taken(Some("new"), Some("new@x.io"), None).await?);
    assert!(!repo.is_taken(None, None, None).await?);

    Ok(())
}

/// Tests that a user re-submitting their own values is not in conflict with themselves.
#[tokio::test]
async fn ignores_excluded_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .user_name("ada")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(!repo.is_taken(Some("ada"), None, Some(user.id)).await?);

    Ok(())
}

/// Tests that a name is checked against existing emails and an email against names.
#[tokio::test]
async fn detects_clash_across_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_name("ada")
        .email("bob@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.is_taken(Some("bob@example.com"), None, None).await?);
    assert!(repo.is_taken(None, Some("ada"), None).await?);

    Ok(())
}
