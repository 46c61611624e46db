use super::*;

#[tokio::test]
async fn lists_owned_sets_by_character() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, campaign, first) = factory::helpers::create_character_with_dependencies(db).await?;
    let second = factory::character::create_character(db, user.id, campaign.id).await?;
    factory::dice_set::create_dice_set(db, &first).await?;
    factory::dice_set::create_dice_set(db, &first).await?;
    factory::dice_set::create_dice_set(db, &second).await?;
    factory::helpers::create_dice_set_with_dependencies(db).await?;

    let repo = DiceSetRepository::new(db);

    let all = repo
        .list(
            DiceSetFilter {
                user_id: user.id,
                character_id: None,
            },
            Page::default(),
        )
        .await?;
    assert_eq!(all.len(), 3);

    let for_first = repo
        .list(
            DiceSetFilter {
                user_id: user.id,
                character_id: Some(first.id),
            },
            Page::default(),
        )
        .await?;
    assert_eq!(for_first.len(), 2);
    assert_eq!(repo.count_by_character(first.id).await?, 2);

    Ok(())
}
