use super::*;

/// Tests that trimming keeps the newest rows and evicts the oldest.
#[tokio::test]
async fn keeps_newest_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, character) = factory::helpers::create_character_with_dependencies(db).await?;
    let start = Utc::now() - Duration::hours(1);

    let mut ids = Vec::new();
    for i in 0..6 {
        let log = factory::dice_log::DiceLogFactory::new(db, &character)
            .timestamp(start + Duration::seconds(i))
            .build()
            .await?;
        ids.push(log.id);
    }

    let repo = DiceLogRepository::new(db);

    assert_eq!(repo.trim_user_history(user.id, 4).await?, 2);
    assert_eq!(repo.count_by_user(user.id).await?, 4);
    assert!(repo.find_by_id(ids[0]).await?.is_none());
    assert!(repo.find_by_id(ids[1]).await?.is_none());
    assert!(repo.find_by_id(ids[2]).await?.is_some());

    Ok(())
}

/// Tests that other users' rows are never evicted.
#[tokio::test]
async fn scoped_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (ada, _, mine) = factory::helpers::create_character_with_dependencies(db).await?;
    let (grace, _, theirs) = factory::helpers::create_character_with_dependencies(db).await?;
    for _ in 0..3 {
        factory::dice_log::create_dice_log(db, &mine).await?;
        factory::dice_log::create_dice_log(db, &theirs).await?;
    }

    let repo = DiceLogRepository::new(db);

    assert_eq!(repo.trim_user_history(ada.id, 1).await?, 2);
    assert_eq!(repo.count_by_user(grace.id).await?, 3);
    assert_eq!(repo.trim_user_history(grace.id, 10).await?, 0);

    Ok(())
}
