mod common;

use axum::http::StatusCode;
use common::{spawn_app, MockProvider};
use rust_decimal_macros::dec;
use serde_json::json;

#[tokio::test]
async fn lessons_and_recommendations_are_public() {
    let app = spawn_app(MockProvider::default(), &[]).await;

    let (status, body) = app.get("/api/v1/lessons", None).await;
    assert_eq!(status, StatusCode::OK);
    let lessons = body["lessons"].as_array().unwrap();
    assert_eq!(lessons.len(), 2);
    assert_eq!(lessons[0]["title"], "Introduction to Stock Trading");
    assert!(lessons[0]["datePosted"].is_string());

    let (status, body) = app.get("/api/v1/stock-recommendations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body[1],
        json!({ "name": "Microsoft Corp.", "price": 411.78, "recommendation": "Hold" })
    );
}

#[tokio::test]
async fn blog_posts_require_auth_to_create() {
    let app = spawn_app(MockProvider::default(), &[]).await;
    let post = json!({ "title": "First", "content": "Hello markets" });

    let (status, _) = app.post("/api/v1/blog", None, post.clone()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = app.register_and_login("writer@example.com", "pw").await;
    let (status, body) = app.post("/api/v1/blog", Some(&token), post).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["author"], "writer@example.com");

    let (status, body) = app
        .post("/api/v1/blog", Some(&token), json!({ "title": "No body" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "title-and-content-required");

    let (status, body) = app.get("/api/v1/blog", None).await;
    assert_eq!(status, StatusCode::OK);
    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "First");
    assert_eq!(posts[0]["content"], "Hello markets");
}

#[tokio::test]
async fn chat_answers_from_keywords() {
    let app = spawn_app(MockProvider::default(), &[]).await;

    let (status, body) = app
        .post("/api/v1/chat", None, json!({ "message": "Tell me about DIVIDENDS" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["response"]
        .as_str()
        .unwrap()
        .starts_with("Dividends are cash payments"));

    let (status, _) = app.post("/api/v1/chat", None, json!({ "message": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn contact_is_queued_without_a_mailer() {
    let app = spawn_app(MockProvider::default(), &[]).await;

    let (status, body) = app
        .post(
            "/api/v1/contact",
            None,
            json!({ "name": "Ada", "email": "ada@example.com", "message": "Hi there" }),
        )
        .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["status"], "queued");

    let (status, body) = app
        .post("/api/v1/contact", None, json!({ "name": "Ada" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn stock_lookup_returns_history_and_profile() {
    let provider = MockProvider::default().with_closes("NVDA", vec![dec!(118.456), dec!(119.5)]);
    let app = spawn_app(provider, &[]).await;

    let (status, body) = app.get("/api/v1/stock/nvda", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["symbol"], "NVDA");
    assert_eq!(body["info"]["longName"], "NVDA Inc.");
    assert_eq!(body["info"]["marketCap"], 1_500_000_000_000u64);
    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["close"], 118.46);

    let (status, body) = app.get("/api/v1/stock/UNKNOWN", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["message"], "stock-fetch-failed");
}
