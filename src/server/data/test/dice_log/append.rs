use super::*;

#[tokio::test]
async fn appends_with_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, character) = factory::helpers::create_character_with_dependencies(db).await?;
    let before = Utc::now();

    let repo = DiceLogRepository::new(db);
    let log = repo.append(new_log(&character, 17)).await?;

    assert_eq!(log.user_id, user.id);
    assert_eq!(log.result, 17);
    assert_eq!(log.roll, "d20");
    assert!(log.diceset_id.is_none());
    assert!(log.timestamp >= before - Duration::seconds(1));
    assert_eq!(repo.count_by_user(user.id).await?, 1);
    assert_eq!(repo.count_by_character(character.id).await?, 1);

    Ok(())
}

/// Tests that a log cannot reference a missing dice set.
#[tokio::test]
async fn rejects_unknown_dice_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, character) = factory::helpers::create_character_with_dependencies(db).await?;

    let mut log = new_log(&character, 3);
    log.diceset_id = Some(999);

    assert!(DiceLogRepository::new(db).append(log).await.is_err());

    Ok(())
}
