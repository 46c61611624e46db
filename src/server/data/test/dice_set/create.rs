use super::*;

/// Tests creating a set with its composition.
///
/// Expected: entries come back in the order given with their quantities
#[tokio::test]
async fn creates_set_with_dices() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, campaign, character) =
        factory::helpers::create_character_with_dependencies(db).await?;
    let d20 = factory::dice::create_dice(db, "d20", 20).await?;
    let d6 = factory::dice::create_dice(db, "d6", 6).await?;

    let set = DiceSetRepository::new(db)
        .create(NewDiceSet {
            name: "Greatsword".to_string(),
            user_id: user.id,
            campaign_id: campaign.id,
            character_id: character.id,
            dices: vec![(d20.id, 1), (d6.id, 2)],
        })
        .await?;

    assert_eq!(set.name, "Greatsword");
    assert_eq!(set.character_id, character.id);
    let entries: Vec<(i32, i32)> = set.dices.iter().map(|e| (e.dice.id, e.quantity)).collect();
    assert_eq!(entries, vec![(d20.id, 1), (d6.id, 2)]);

    Ok(())
}

/// Tests that an empty composition is allowed at the store level.
#[tokio::test]
async fn creates_empty_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, campaign, character) =
        factory::helpers::create_character_with_dependencies(db).await?;

    let set = DiceSetRepository::new(db)
        .create(NewDiceSet {
            name: "Empty".to_string(),
            user_id: user.id,
            campaign_id: campaign.id,
            character_id: character.id,
            dices: vec![],
        })
        .await?;

    assert!(set.dices.is_empty());

    Ok(())
}
