use super::*;

/// Tests that only the supplied columns change.
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(
            user.id,
            UserChanges {
                user_name: Some("renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.user_name, "renamed");
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.password_hash, user.password_hash);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(999, UserChanges::default())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests deleting a user row.
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert_eq!(repo.delete(user.id).await?, 1);
    assert!(repo.find_by_id(user.id).await?.is_none());
    assert_eq!(repo.delete(user.id).await?, 0);

    Ok(())
}
