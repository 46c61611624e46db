use super::*;

/// Tests that replacing the composition drops the old join rows.
#[tokio::test]
async fn replaces_composition() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, set) = factory::helpers::create_dice_set_with_dependencies(db).await?;
    let d8 = factory::dice::create_dice(db, "d8", 8).await?;

    let repo = DiceSetRepository::new(db);
    repo.replace_dices(set.id, &[(d8.id, 2)]).await?;
    repo.rename(set.id, "Renamed".to_string()).await?;

    let loaded = repo.find_by_id(set.id).await?.unwrap();
    assert_eq!(loaded.name, "Renamed");
    assert_eq!(loaded.dices.len(), 1);
    assert_eq!(loaded.dices[0].dice.id, d8.id);
    assert_eq!(loaded.dices[0].quantity, 2);
    assert_eq!(repo.count_dices(&[set.id]).await?, 1);

    Ok(())
}
