use super::*;

#[tokio::test]
async fn deletes_by_campaign() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, campaign, character) =
        factory::helpers::create_character_with_dependencies(db).await?;
    factory::character::create_character(db, user.id, campaign.id).await?;
    let other = factory::campaign::create_campaign(db, user.id).await?;
    factory::character::create_character(db, user.id, other.id).await?;

    let repo = CharacterRepository::new(db);

    assert_eq!(repo.delete_by_campaign(campaign.id).await?, 2);
    assert!(repo.find_by_id(character.id).await?.is_none());
    assert_eq!(repo.count_by_user(user.id).await?, 1);
    assert_eq!(repo.delete_by_user(user.id).await?, 1);

    Ok(())
}
