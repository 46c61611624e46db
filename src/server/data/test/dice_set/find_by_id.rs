use super::*;

/// Tests that draw order follows join row position, not dice id.
#[tokio::test]
async fn loads_dices_in_position_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, character) = factory::helpers::create_character_with_dependencies(db).await?;
    let d4 = factory::dice::create_dice(db, "d4", 4).await?;
    let d100 = factory::dice::create_dice(db, "d100", 100).await?;

    let set = factory::dice_set::DiceSetFactory::new(db, &character)
        .dice(d100.id, 1)
        .dice(d4.id, 3)
        .build()
        .await?;

    let loaded = DiceSetRepository::new(db).find_by_id(set.id).await?.unwrap();

    let names: Vec<&str> = loaded.dices.iter().map(|e| e.dice.name.as_str()).collect();
    assert_eq!(names, vec!["d100", "d4"]);
    assert_eq!(loaded.draws().count(), 4);

    Ok(())
}

#[tokio::test]
async fn returns_none_for_missing_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(DiceSetRepository::new(db).find_by_id(1).await?.is_none());

    Ok(())
}
