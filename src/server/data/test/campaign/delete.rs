use super::*;

#[tokio::test]
async fn deletes_by_id_and_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_campaign_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let first = factory::campaign::create_campaign(db, user.id).await?;
    factory::campaign::create_campaign(db, user.id).await?;
    factory::campaign::create_campaign(db, user.id).await?;

    let repo = CampaignRepository::new(db);

    assert_eq!(repo.delete(first.id).await?, 1);
    assert!(repo.find_by_id(first.id).await?.is_none());
    assert_eq!(repo.delete_by_user(user.id).await?, 2);
    assert_eq!(repo.count_by_user(user.id).await?, 0);

    Ok(())
}
