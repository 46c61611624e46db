use super::*;

/// Tests that the catalog lists smallest dice first regardless of insert order.
#[tokio::test]
async fn orders_by_sides() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Dice).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::dice::create_dice(db, "d20", 20).await?;
    factory::dice::create_dice(db, "d4", 4).await?;
    factory::dice::create_dice(db, "d10", 10).await?;

    let sides: Vec<i32> = DiceRepository::new(db)
        .list(Page::default())
        .await?
        .into_iter()
        .map(|d| d.sides)
        .collect();

    assert_eq!(sides, vec![4, 10, 20]);

    Ok(())
}
