use super::*;

/// Tests substring filtering and id ordering.
///
/// Expected: only users whose name contains the filter, lowest id first
#[tokio::test]
async fn filters_by_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::UserFactory::new(db)
        .user_name("gandalf")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .user_name("frodo")
        .build()
        .await?;
    let second = factory::user::UserFactory::new(db)
        .user_name("gandalf_white")
        .build()
        .await?;

    let users = UserRepository::new(db)
        .list(
            UserFilter {
                user_name: Some("gandalf".to_string()),
            },
            Page::default(),
        )
        .await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that offset and limit window the ordered result.
#[tokio::test]
async fn applies_offset_and_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::user::create_user(db).await?.id);
    }

    let users = UserRepository::new(db)
        .list(UserFilter::default(), Page { offset: 1, limit: 2 })
        .await?;

    let got: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(got, ids[1..3].to_vec());

    Ok(())
}
