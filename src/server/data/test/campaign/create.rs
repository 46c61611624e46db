use super::*;

/// Tests creating a campaign for an existing user.
#[tokio::test]
async fn creates_campaign() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = CampaignRepository::new(db);
    let campaign = repo
        .create(CreateCampaignParams {
            title: "Curse of Strahd".to_string(),
            genre: Some("horror".to_string()),
            description: None,
            max_classes: 3,
            created_by: user.id,
        })
        .await?;

    assert_eq!(campaign.title, "Curse of Strahd");
    assert_eq!(campaign.genre.as_deref(), Some("horror"));
    assert_eq!(campaign.max_classes, 3);
    assert_eq!(campaign.created_by, user.id);
    assert_eq!(repo.find_by_id(campaign.id).await?, Some(campaign));

    Ok(())
}

/// Tests that the store enforces unique titles per owner.
///
/// Expected: Err for the same owner, Ok for a different owner
#[tokio::test]
async fn title_unique_per_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ada = factory::user::create_user(db).await?;
    let grace = factory::user::create_user(db).await?;
    factory::campaign::CampaignFactory::new(db, ada.id)
        .title("Shared")
        .build()
        .await?;

    let repo = CampaignRepository::new(db);
    let params = |created_by| CreateCampaignParams {
        title: "Shared".to_string(),
        genre: None,
        description: None,
        max_classes: 4,
        created_by,
    };

    assert!(repo.create(params(ada.id)).await.is_err());
    assert!(repo.create(params(grace.id)).await.is_ok());

    Ok(())
}
