use super::*;

/// Tests the bulk helpers used by cascades.
#[tokio::test]
async fn deletes_join_rows_then_sets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, campaign, character, set) =
        factory::helpers::create_dice_set_with_dependencies(db).await?;
    factory::dice_set::create_dice_set(db, &character).await?;

    let repo = DiceSetRepository::new(db);

    let mut ids = repo.ids_by_character(character.id).await?;
    ids.sort();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[0], set.id);
    assert_eq!(repo.ids_by_campaign(campaign.id).await?.len(), 2);
    assert_eq!(repo.ids_by_user(user.id).await?.len(), 2);

    assert_eq!(repo.count_dices(&ids).await?, 1);
    assert_eq!(repo.delete_dices(&ids).await?, 1);
    assert_eq!(repo.delete_many(&ids).await?, 2);
    assert!(repo.find_by_id(set.id).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn empty_id_lists_are_no_ops() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiceSetRepository::new(db);

    assert_eq!(repo.count_dices(&[]).await?, 0);
    assert_eq!(repo.delete_dices(&[]).await?, 0);
    assert_eq!(repo.delete_many(&[]).await?, 0);

    Ok(())
}
