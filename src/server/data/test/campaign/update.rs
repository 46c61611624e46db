use super::*;

/// Tests a partial update leaving untouched fields as they were.
#[tokio::test]
async fn updates_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let campaign = factory::campaign::CampaignFactory::new(db, user.id)
        .genre(Some("fantasy".to_string()))
        .build()
        .await?;

    let updated = CampaignRepository::new(db)
        .update(
            campaign.id,
            UpdateCampaignParams {
                max_classes: Some(2),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.max_classes, 2);
    assert_eq!(updated.title, campaign.title);
    assert_eq!(updated.genre.as_deref(), Some("fantasy"));

    Ok(())
}

#[tokio::test]
async fn fails_for_missing_campaign() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CampaignRepository::new(db)
        .update(42, UpdateCampaignParams::default())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
