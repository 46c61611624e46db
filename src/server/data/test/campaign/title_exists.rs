use super::*;

#[tokio::test]
async fn checks_owner_and_exclusion() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ada = factory::user::create_user(db).await?;
    let grace = factory::user::create_user(db).await?;
    let campaign = factory::campaign::CampaignFactory::new(db, ada.id)
        .title("Phandelver")
        .build()
        .await?;

    let repo = CampaignRepository::new(db);

    assert!(repo.title_exists(ada.id, "Phandelver", None).await?);
    assert!(!repo.title_exists(grace.id, "Phandelver", None).await?);
    assert!(!repo.title_exists(ada.id, "Phandelver", Some(campaign.id)).await?);

    Ok(())
}
