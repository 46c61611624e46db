use super::*;

/// Tests newest-first ordering with id breaking timestamp ties.
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, character) = factory::helpers::create_character_with_dependencies(db).await?;
    let now = Utc::now();

    let old = factory::dice_log::DiceLogFactory::new(db, &character)
        .timestamp(now - Duration::minutes(5))
        .build()
        .await?;
    let tied_a = factory::dice_log::DiceLogFactory::new(db, &character)
        .timestamp(now)
        .build()
        .await?;
    let tied_b = factory::dice_log::DiceLogFactory::new(db, &character)
        .timestamp(now)
        .build()
        .await?;

    let ids: Vec<i32> = DiceLogRepository::new(db)
        .list(
            DiceLogFilter {
                user_id: user.id,
                campaign_id: None,
                character_id: None,
            },
            Page::default(),
        )
        .await?
        .into_iter()
        .map(|l| l.id)
        .collect();

    assert_eq!(ids, vec![tied_b.id, tied_a.id, old.id]);

    Ok(())
}

/// Tests that another user's history is never listed.
#[tokio::test]
async fn excludes_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (ada, campaign, mine) = factory::helpers::create_character_with_dependencies(db).await?;
    let (_, _, theirs) = factory::helpers::create_character_with_dependencies(db).await?;
    factory::dice_log::create_dice_log(db, &mine).await?;
    factory::dice_log::create_dice_log(db, &theirs).await?;

    let logs = DiceLogRepository::new(db)
        .list(
            DiceLogFilter {
                user_id: ada.id,
                campaign_id: Some(campaign.id),
                character_id: Some(mine.id),
            },
            Page::default(),
        )
        .await?;

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].user_id, ada.id);

    Ok(())
}
