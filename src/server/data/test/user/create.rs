use super::*;

/// Tests creating a user row.
///
/// Expected: Ok with the stored values echoed back and a creation time set
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            user_name: "ada".to_string(),
            email: "ada@x.io".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert_eq!(user.user_name, "ada");
    assert_eq!(user.email, "ada@x.io");
    assert_eq!(user.password_hash, "hash");

    let found = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(found.user_name, user.user_name);
    assert_eq!(found.email, user.email);

    Ok(())
}

/// Tests that the unique index on user_name rejects a second row.
///
/// Expected: Err from the database
#[tokio::test]
async fn rejects_duplicate_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_name("ada")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            user_name: "ada".to_string(),
            email: "other@x.io".to_string(),
            password_hash: "hash".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
