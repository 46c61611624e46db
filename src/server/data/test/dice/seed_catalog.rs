use super::*;

/// Tests that seeding twice inserts the catalog once.
///
/// Expected: 7 inserted on the first run, 0 on the second
#[tokio::test]
async fn seeds_catalog_idempotently() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Dice).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiceRepository::new(db);

    assert_eq!(repo.seed_catalog().await?, DICE_CATALOG.len());
    assert_eq!(repo.seed_catalog().await?, 0);
    assert_eq!(repo.list(Page::default()).await?.len(), DICE_CATALOG.len());

    Ok(())
}

/// Tests that a partially present catalog is completed.
#[tokio::test]
async fn fills_missing_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Dice).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::dice::create_dice(db, "d20", 20).await?;

    let inserted = DiceRepository::new(db).seed_catalog().await?;

    assert_eq!(inserted, DICE_CATALOG.len() - 1);

    Ok(())
}
