use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use quote_api::config::ApiConfig;
use quote_api::router;
use quote_api::state::AppState;
use quoteforge_core::LookupMode;

fn app_with(config: ApiConfig) -> Router {
    router(AppState::from_config(&config).unwrap())
}

fn app() -> Router {
    app_with(ApiConfig::default())
}

async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post(app: Router, uri: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn order_body() -> Value {
    json!({
        "catalog": "order-form",
        "customer": {
            "name": "Jane Doe",
            "email": "jane@example.com",
            "platform": "Fiverr",
            "platformUrl": "https://www.fiverr.com/jane"
        },
        "selection": {
            "basePackageId": "main",
            "extraUnits": 1,
            "selectedAddOns": ["dark-mode"]
        },
        "customizations": "Navy and gold palette"
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let response = get(app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}

#[tokio::test]
async fn lists_both_catalogs() {
    let body = json_body(get(app(), "/catalogs").await).await;
    assert_eq!(body["defaultCatalog"], "order-form");

    let names: Vec<&str> = body["catalogs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["calculator", "order-form"]);
}

#[tokio::test]
async fn catalog_detail_groups_items() {
    let response = get(app(), "/catalogs/calculator").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["basePackages"], json!(["basic", "business", "ecommerce", "custom"]));
    assert_eq!(body["categories"][0]["name"], "packages");
    assert_eq!(body["rules"]["lookup"], "strict");
}

#[tokio::test]
async fn unknown_catalog_is_404() {
    let response = get(app(), "/catalogs/wholesale").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn quotes_the_calculator_catalog() {
    let request = json!({
        "basePackageId": "basic",
        "extraUnits": 2,
        "rushTier": "quarter",
        "advanceTier": "full"
    });
    let response = post(app(), "/catalogs/calculator/quote", &request.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["catalog"], "calculator");
    assert_eq!(body["subtotal"], 670.0);
    assert_eq!(body["discountAmount"], 167.5);
    assert_eq!(body["finalTotal"], 502.5);
    assert_eq!(body["estimatedDurationDays"], 2);
    assert_eq!(body["cents"]["finalTotal"], 50250);
}

#[tokio::test]
async fn quotes_the_order_form_example() {
    let request = r#"{"basePackageId":"main","extraUnits":2,
        "selectedAddOns":["dark-mode","seo-optimization"],"rushTier":"half",
        "ownershipRights":true,"advanceTier":"fifty"}"#;
    let response = post(app(), "/catalogs/order-form/quote", request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["subtotal"], 610.0);
    assert_eq!(body["discountAmount"], 61.0);
    assert_eq!(body["finalTotal"], 549.0);
    assert_eq!(body["estimatedDurationDays"], 4);
    assert_eq!(body["lines"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn default_catalog_prices_the_main_page_request() {
    let request = r#"{"basePackageId":"main","extraUnits":2,
        "selectedAddOns":["dark-mode","seo-optimization"],"rushTier":"half",
        "ownershipRights":true,"advanceTier":"fifty"}"#;
    let response = post(app(), "/quote", request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["catalog"], "order-form");
    assert_eq!(body["finalTotal"], 549.0);
    assert_eq!(body["estimatedDurationDays"], 4);
}

#[tokio::test]
async fn unknown_add_on_is_422() {
    let request = json!({"basePackageId": "main", "selectedAddOns": ["blockchain"]});
    let response = post(app(), "/quote", &request.to_string()).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = json_body(response).await;
    assert_eq!(body["code"], "UNKNOWN_CATALOG_ITEM");
    assert!(body["message"].as_str().unwrap().contains("blockchain"));
}

#[tokio::test]
async fn lenient_mode_skips_unknown_add_on() {
    let app = app_with(ApiConfig {
        lookup: LookupMode::Lenient,
        ..ApiConfig::default()
    });
    let request = json!({"basePackageId": "main", "selectedAddOns": ["blockchain", "dark-mode"]});
    let response = post(app, "/quote", &request.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["subtotal"], 190.0);
    assert_eq!(body["skippedAddOns"], json!(["blockchain"]));
}

#[tokio::test]
async fn malformed_body_is_400() {
    let response = post(app(), "/quote", r#"{"basePackageId": 7}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unknown_tier_is_400() {
    let request = json!({"basePackageId": "main", "rushTier": "yesterday"});
    let response = post(app(), "/quote", &request.to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn too_many_extra_units_is_400() {
    let request = json!({"basePackageId": "main", "extraUnits": 1000});
    let response = post(app(), "/quote", &request.to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn negative_extra_units_are_clamped() {
    let request = json!({"basePackageId": "main", "extraUnits": -4});
    let body = json_body(post(app(), "/quote", &request.to_string()).await).await;
    assert_eq!(body["subtotal"], 150.0);
}

#[tokio::test]
async fn accepts_an_order() {
    let response = post(app(), "/orders", &order_body().to_string()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    assert!(body["orderId"].as_str().is_some());
    assert!(body["receivedAt"].as_str().is_some());
    assert_eq!(body["customer"]["name"], "Jane Doe");
    assert_eq!(body["customizations"], "Navy and gold palette");
    // 150 + 80 + 40
    assert_eq!(body["quote"]["catalog"], "order-form");
    assert_eq!(body["quote"]["subtotal"], 270.0);
}

#[tokio::test]
async fn rejects_an_order_without_email() {
    let mut order = order_body();
    order["customer"]["email"] = json!("");
    let response = post(app(), "/orders", &order.to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn rejects_an_order_from_unknown_platform() {
    let mut order = order_body();
    order["customer"]["platform"] = json!("Craigslist");
    let response = post(app(), "/orders", &order.to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_with_unknown_catalog_is_404() {
    let mut order = order_body();
    order["catalog"] = json!("wholesale");
    let response = post(app(), "/orders", &order.to_string()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
