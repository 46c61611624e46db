use super::*;

#[tokio::test]
async fn counts_by_campaign_and_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let first = factory::campaign::create_campaign(db, user.id).await?;
    let second = factory::campaign::create_campaign(db, user.id).await?;
    factory::character::create_character(db, user.id, first.id).await?;
    factory::character::create_character(db, user.id, first.id).await?;
    factory::character::create_character(db, user.id, second.id).await?;

    let repo = CharacterRepository::new(db);

    assert_eq!(repo.count_by_campaign(first.id).await?, 2);
    assert_eq!(repo.count_by_campaign(second.id).await?, 1);
    assert_eq!(repo.count_by_user(user.id).await?, 3);

    Ok(())
}
