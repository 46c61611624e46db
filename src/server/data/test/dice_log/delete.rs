use super::*;

#[tokio::test]
async fn deletes_by_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, campaign, character, set) =
        factory::helpers::create_dice_set_with_dependencies(db).await?;
    let single = factory::dice_log::create_dice_log(db, &character).await?;
    factory::dice_log::DiceLogFactory::new(db, &character)
        .diceset_id(Some(set.id))
        .build()
        .await?;
    factory::dice_log::create_dice_log(db, &character).await?;

    let repo = DiceLogRepository::new(db);

    assert_eq!(repo.count_by_dice_set(set.id).await?, 1);
    assert_eq!(repo.delete_by_dice_set(set.id).await?, 1);
    assert_eq!(repo.delete(single.id).await?, 1);
    assert_eq!(repo.count_by_campaign(campaign.id).await?, 1);
    assert_eq!(repo.delete_by_character(character.id).await?, 1);
    assert_eq!(repo.delete_by_campaign(campaign.id).await?, 0);
    assert_eq!(repo.delete_by_user(user.id).await?, 0);

    Ok(())
}
