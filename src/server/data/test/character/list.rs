use super::*;

/// Tests filtering by campaign and name while excluding other users' characters.
#[tokio::test]
async fn filters_owned_characters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (ada, campaign, _) = factory::helpers::create_character_with_dependencies(db).await?;
    let other_campaign = factory::campaign::create_campaign(db, ada.id).await?;
    let gimli = factory::character::CharacterFactory::new(db, ada.id, other_campaign.id)
        .name("Gimli")
        .build()
        .await?;
    factory::helpers::create_character_with_dependencies(db).await?;

    let repo = CharacterRepository::new(db);

    let all = repo
        .list(
            CharacterFilter {
                user_id: ada.id,
                campaign_id: None,
                name: None,
            },
            Page::default(),
        )
        .await?;
    assert_eq!(all.len(), 2);

    let in_campaign = repo
        .list(
            CharacterFilter {
                user_id: ada.id,
                campaign_id: Some(campaign.id),
                name: None,
            },
            Page::default(),
        )
        .await?;
    assert_eq!(in_campaign.len(), 1);

    let by_name = repo
        .list(
            CharacterFilter {
                user_id: ada.id,
                campaign_id: None,
                name: Some("gim".to_string()),
            },
            Page::default(),
        )
        .await?;
    assert_eq!(by_name.iter().map(|c| c.id).collect::<Vec<_>>(), vec![gimli.id]);

    Ok(())
}
