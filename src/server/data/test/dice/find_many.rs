use super::*;

/// Tests that only existing ids come back, each once.
#[tokio::test]
async fn returns_existing_dice_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Dice).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let d4 = factory::dice::create_dice(db, "d4", 4).await?;
    let d8 = factory::dice::create_dice(db, "d8", 8).await?;

    let mut found: Vec<i32> = DiceRepository::new(db)
        .find_many(&[d4.id, d8.id, d8.id, 999])
        .await?
        .into_iter()
        .map(|d| d.id)
        .collect();
    found.sort();

    assert_eq!(found, vec![d4.id, d8.id]);

    Ok(())
}

#[tokio::test]
async fn finds_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Dice).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let d12 = factory::dice::create_dice(db, "d12", 12).await?;
    let repo = DiceRepository::new(db);

    let dice = repo.find_by_id(d12.id).await?.unwrap();
    assert_eq!(dice.name, "d12");
    assert_eq!(dice.sides, 12);
    assert!(repo.find_by_id(d12.id + 1).await?.is_none());

    Ok(())
}
