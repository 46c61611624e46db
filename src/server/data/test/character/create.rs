use super::*;

/// Tests that skills survive the JSON column unchanged.
#[tokio::test]
async fn creates_character_with_skills() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let campaign = factory::campaign::create_campaign(db, user.id).await?;

    let skills = Skills::from([("strength".to_string(), 16), ("charisma".to_string(), 8)]);

    let repo = CharacterRepository::new(db);
    let character = repo
        .create(CreateCharacterParams {
            name: "Vex".to_string(),
            race: "Half-elf".to_string(),
            skills: skills.clone(),
            notes: Some("ranger".to_string()),
            inventory: None,
            campaign_id: campaign.id,
            user_id: user.id,
        })
        .await?;

    assert_eq!(character.name, "Vex");
    assert_eq!(character.skills, skills);
    assert_eq!(character.campaign_id, campaign.id);

    let found = repo.find_by_id(character.id).await?;
    assert_eq!(found, Some(character));

    Ok(())
}

/// Tests that a character cannot reference a missing campaign.
///
/// Expected: Err from the foreign key
#[tokio::test]
async fn rejects_missing_campaign() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = CharacterRepository::new(db)
        .create(CreateCharacterParams {
            name: "Orphan".to_string(),
            race: "Human".to_string(),
            skills: Skills::new(),
            notes: None,
            inventory: None,
            campaign_id: 999,
            user_id: user.id,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
