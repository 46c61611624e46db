use super::*;

/// Tests that listing only returns the owner's campaigns, filtered by title.
#[tokio::test]
async fn lists_only_owned_campaigns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ada = factory::user::create_user(db).await?;
    let grace = factory::user::create_user(db).await?;
    let dragons = factory::campaign::CampaignFactory::new(db, ada.id)
        .title("Dragons of Autumn")
        .build()
        .await?;
    factory::campaign::CampaignFactory::new(db, ada.id)
        .title("Tomb of Horrors")
        .build()
        .await?;
    factory::campaign::CampaignFactory::new(db, grace.id)
        .title("Dragon Heist")
        .build()
        .await?;

    let repo = CampaignRepository::new(db);

    let all = repo
        .list(
            CampaignFilter {
                created_by: ada.id,
                title: None,
            },
            Page::default(),
        )
        .await?;
    assert_eq!(all.len(), 2);

    let filtered = repo
        .list(
            CampaignFilter {
                created_by: ada.id,
                title: Some("dragon".to_string()),
            },
            Page::default(),
        )
        .await?;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, dragons.id);

    assert_eq!(repo.count_by_user(ada.id).await?, 2);

    Ok(())
}
