use super::*;

#[tokio::test]
async fn update_me_keeps_unset_fields() {
    let app = TestApp::new().await;
    let token = app.sign_up("ada").await;

    let response = app
        .send(
            Method::PATCH,
            "/api/users/me/update",
            Some(&token),
            Some(json!({ "user_name": "ada_l" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user_name"], "ada_l");
    assert_eq!(response.body["email"], "ada@example.com");
}

#[tokio::test]
async fn update_me_rejects_taken_email() {
    let app = TestApp::new().await;
    let token = app.sign_up("ada").await;
    app.register("bob").await;

    let response = app
        .send(
            Method::PATCH,
            "/api/users/me/update",
            Some(&token),
            Some(json!({ "email": "bob@example.com" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_me_leaves_other_users_alone() {
    let app = TestApp::new().await;
    let ada = app.sign_up("ada").await;
    let bob = app.sign_up("bob").await;
    let ada_campaign = app.campaign(&ada, "Curse of Strahd").await;
    app.character(&ada, ada_campaign, "Ireena").await;
    let bob_campaign = app.campaign(&bob, "Tomb of Annihilation").await;
    app.character(&bob, bob_campaign, "Syndra").await;

    let deleted = app
        .send(Method::DELETE, "/api/users/me/delete", Some(&ada), None)
        .await;
    let bob_campaigns = app.get("/api/campaigns/", &bob).await;
    let bob_characters = app.get("/api/classes/", &bob).await;
    let users = app.get("/api/users/", &bob).await;

    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(bob_campaigns.body.as_array().unwrap().len(), 1);
    assert_eq!(bob_characters.body.as_array().unwrap().len(), 1);
    let names: Vec<&str> = users
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["user_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["bob"]);
}

#[tokio::test]
async fn users_can_be_read_by_id() {
    let app = TestApp::new().await;
    let token = app.sign_up("ada").await;
    let bob = app.register("bob").await;
    let bob_id = bob.body["id"].as_i64().unwrap();

    let response = app.get(&format!("/api/users/{}", bob_id), &token).await;
    let missing = app.get("/api/users/999", &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user_name"], "bob");
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
