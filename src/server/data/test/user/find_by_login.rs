use super::*;

/// Tests that login lookup matches on either the name or the email.
///
/// Expected: the same user for both identifiers, None for an unknown one
#[tokio::test]
async fn matches_name_or_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .user_name("ada")
        .email("ada@x.io")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.find_by_login("ada").await?.map(|u| u.id), Some(user.id));
    assert_eq!(repo.find_by_login("ada@x.io").await?.map(|u| u.id), Some(user.id));
    assert!(repo.find_by_login("grace").await?.is_none());

    Ok(())
}

/// Tests lookup by email, which resolves token subjects.
#[tokio::test]
async fn finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let found = UserRepository::new(db).find_by_email(&user.email).await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that an email match wins when another account's name equals the same text.
///
/// Expected: the email owner, even when the name holder was inserted first
#[tokio::test]
async fn prefers_email_over_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_name("bob@example.com")
        .email("mallory@example.com")
        .build()
        .await?;
    let bob = factory::user::UserFactory::new(db)
        .user_name("bob")
        .email("bob@example.com")
        .build()
        .await?;

    let found = UserRepository::new(db).find_by_login("bob@example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(bob.id));

    Ok(())
}
