//! HTTP-level tests driving the full router over an in-memory database.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use jsonwebtoken::Algorithm;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{
    config::Config,
    data::dice::DiceRepository,
    router::router,
    service::{
        roller::{DiceRoller, RandomRoller},
        token::TokenSigner,
    },
    state::AppState,
};

mod user;

const PASSWORD: &str = "secret123";

fn config(rate_limit_enabled: bool) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret_key: "http-secret".to_string(),
        jwt_algorithm: Algorithm::HS256,
        access_token_expire_minutes: 30,
        cors_allowed_origins: Vec::new(),
        bind_address: "127.0.0.1:0".to_string(),
        rate_limit_enabled,
        trust_proxy_headers: false,
    }
}

struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

/// Router wired to a fresh database with the dice catalog seeded.
struct TestApp {
    router: Router,
    _context: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        Self::build(Arc::new(RandomRoller::seeded(7)), false).await
    }

    async fn with_roller(roller: Arc<dyn DiceRoller>) -> Self {
        Self::build(roller, false).await
    }

    async fn rate_limited() -> Self {
        Self::build(Arc::new(RandomRoller::seeded(7)), true).await
    }

    async fn build(roller: Arc<dyn DiceRoller>, rate_limit_enabled: bool) -> Self {
        let context = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = context.db.clone().unwrap();
        DiceRepository::new(&db).seed_catalog().await.unwrap();

        let config = config(rate_limit_enabled);
        let router = router(&config).unwrap().with_state(AppState::new(
            db,
            TokenSigner::from_config(&config),
            roller,
        ));

        Self {
            router,
            _context: context,
        }
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        Response {
            status,
            headers,
            body,
        }
    }

    async fn get(&self, uri: &str, token: &str) -> Response {
        self.send(Method::GET, uri, Some(token), None).await
    }

    async fn post(&self, uri: &str, token: &str, body: Value) -> Response {
        self.send(Method::POST, uri, Some(token), Some(body)).await
    }

    async fn register(&self, user_name: &str) -> Response {
        self.send(
            Method::POST,
            "/api/auth/register",
            None,
            Some(json!({
                "user_name": user_name,
                "email": format!("{}@example.com", user_name),
                "password": PASSWORD,
            })),
        )
        .await
    }

    /// Registers `user_name` and returns a bearer token for it.
    async fn sign_up(&self, user_name: &str) -> String {
        let registered = self.register(user_name).await;
        assert_eq!(registered.status, StatusCode::OK, "{}", registered.body);

        let login = self
            .send(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({ "username": user_name, "password": PASSWORD })),
            )
            .await;
        assert_eq!(login.status, StatusCode::OK, "{}", login.body);

        login.body["access_token"].as_str().unwrap().to_string()
    }

    /// Creates a campaign owned by the token's user and returns its id.
    async fn campaign(&self, token: &str, title: &str) -> i64 {
        let created = self
            .post("/api/campaigns/", token, json!({ "title": title, "max_classes": 2 }))
            .await;
        assert_eq!(created.status, StatusCode::OK, "{}", created.body);

        created.body["id"].as_i64().unwrap()
    }

    /// Creates a character in `campaign_id` and returns its id.
    async fn character(&self, token: &str, campaign_id: i64, name: &str) -> i64 {
        let created = self
            .post(
                "/api/classes/",
                token,
                json!({ "name": name, "race": "Elf", "campaign_id": campaign_id }),
            )
            .await;
        assert_eq!(created.status, StatusCode::OK, "{}", created.body);

        created.body["id"].as_i64().unwrap()
    }
}
