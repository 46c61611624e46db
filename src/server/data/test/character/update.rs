use super::*;

#[tokio::test]
async fn replaces_skills_and_keeps_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, character) = factory::helpers::create_character_with_dependencies(db).await?;

    let skills = Skills::from([("wisdom".to_string(), 14)]);
    let updated = CharacterRepository::new(db)
        .update(
            character.id,
            UpdateCharacterParams {
                skills: Some(skills.clone()),
                notes: Some("cleric".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, character.name);
    assert_eq!(updated.skills, skills);
    assert_eq!(updated.notes.as_deref(), Some("cleric"));

    Ok(())
}
