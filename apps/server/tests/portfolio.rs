mod common;

use axum::http::StatusCode;
use common::{spawn_app, MockProvider};
use rust_decimal_macros::dec;
use serde_json::json;

fn provider() -> MockProvider {
    MockProvider::default()
        .with_closes("AAPL", vec![dec!(120), dec!(140), dec!(150)])
        .with_closes("MSFT", vec![dec!(90.004)])
}

#[tokio::test]
async fn values_recorded_lots_and_skips_unpriced_tickers() {
    let app = spawn_app(provider(), &[]).await;
    let token = app.register_and_login("me@example.com", "pw").await;

    let lots = json!([
        { "ticker": "aapl", "buyDate": "2024-01-02", "buyPrice": 100, "quantity": 1 },
        { "ticker": "AAPL", "buyDate": "2023-06-01", "buyPrice": 110, "quantity": 1 },
        { "ticker": "GONE", "buyPrice": 10, "quantity": 5 }
    ]);
    let (status, body) = app
        .post("/api/v1/portfolio/me/lots", Some(&token), lots)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["recorded"], 3);

    let (status, body) = app.get("/api/v1/portfolio/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    let holdings = body["holdings"].as_array().unwrap();
    assert_eq!(holdings.len(), 1);
    let aapl = &holdings[0];
    assert_eq!(aapl["ticker"], "AAPL");
    assert_eq!(aapl["longName"], "AAPL Inc.");
    assert_eq!(aapl["sector"], "Technology");
    assert_eq!(aapl["earliestBuyDate"], "2023-06-01");
    assert_eq!(aapl["weightedAvgPrice"], 105.0);
    assert_eq!(aapl["currentPrice"], 150.0);
    assert_eq!(aapl["totalQuantity"], 2.0);
    assert_eq!(aapl["performance"], "Up");
    assert_eq!(aapl["invested"], 210.0);
    assert_eq!(aapl["currentValue"], 300.0);
    assert_eq!(aapl["history"].as_array().unwrap().len(), 3);
    assert_eq!(aapl["history"][2]["close"], 150.0);

    assert_eq!(
        body["summary"],
        json!({
            "totalInvested": 210.0,
            "totalReturn": 90.0,
            "totalCurrentValue": 300.0,
            "percentageUp": 42.86
        })
    );
}

#[tokio::test]
async fn rejects_invalid_lots() {
    let app = spawn_app(provider(), &[]).await;
    let token = app.register_and_login("me@example.com", "pw").await;

    let (status, body) = app
        .post(
            "/api/v1/portfolio/me/lots",
            Some(&token),
            json!([{ "ticker": " ", "buyPrice": 10, "quantity": 1 }]),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn unknown_variant_is_a_bad_request() {
    let app = spawn_app(provider(), &[]).await;
    let token = app.register_and_login("me@example.com", "pw").await;
    let (status, body) = app.get("/api/v1/portfolio/europe", Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "unknown-portfolio");
}

#[tokio::test]
async fn master_portfolio_requires_subscription() {
    let app = spawn_app(
        provider(),
        &[("SL_MASTER_PORTFOLIO_EMAIL", "master@example.com")],
    )
    .await;

    let master_token = app.register_and_login("master@example.com", "pw").await;
    app.post(
        "/api/v1/portfolio/me/lots",
        Some(&master_token),
        json!([{ "ticker": "MSFT", "buyDate": "2024-02-01", "buyPrice": 80, "quantity": 10 }]),
    )
    .await;

    let token = app.register_and_login("reader@example.com", "pw").await;
    let (status, body) = app.get("/api/v1/portfolio/master", Some(&token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "subscription-required");

    let reader = app
        .state
        .user_service
        .find_by_email("reader@example.com")
        .unwrap()
        .unwrap();
    app.state
        .user_service
        .set_subscription_code(&reader.id, Some("VIP".to_string()))
        .await
        .unwrap();
    let (_, body) = app
        .post(
            "/api/v1/auth/subscription",
            Some(&token),
            json!({ "subscriptionCode": "VIP" }),
        )
        .await;
    let subscribed = body["accessToken"].as_str().unwrap().to_string();

    let (status, body) = app.get("/api/v1/portfolio/master", Some(&subscribed)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["holdings"][0]["ticker"], "MSFT");
    assert_eq!(body["holdings"][0]["currentPrice"], 90.0);
    assert_eq!(body["summary"]["totalInvested"], 800.0);
    assert_eq!(body["summary"]["totalCurrentValue"], 900.0);
    assert_eq!(body["summary"]["totalReturn"], 100.0);
}

#[tokio::test]
async fn missing_portfolio_owner_is_not_found() {
    let app = spawn_app(provider(), &[("SL_USA_PORTFOLIO_EMAIL", "usa@example.com")]).await;
    let token = app.register_and_login("me@example.com", "pw").await;
    let (status, body) = app.get("/api/v1/portfolio/usa", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "portfolio-owner-not-found");
}
