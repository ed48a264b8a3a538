use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use cart_extension::lifecycle::{CatalogSeed, CatalogSystem};
use cart_extension::service::{router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

async fn test_app() -> (Router, CatalogSystem) {
    let system = CatalogSystem::new();
    let seed = CatalogSeed::from_json(
        r#"{
            "products": [{ "id": "P1", "name": "Widget" }],
            "inventory": [{ "sku": "ABC", "quantityOnStock": 3 }]
        }"#,
    )
    .unwrap();
    system.seed(&seed).await.unwrap();
    let app = router(AppState::new(Arc::new(system.lookup())));
    (app, system)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn cart_request(action: &str, line_items: Value) -> Value {
    json!({
        "action": action,
        "resource": {
            "typeId": "cart",
            "id": "cart-1",
            "obj": { "lineItems": line_items }
        }
    })
}

#[tokio::test]
async fn create_returns_recalculate_directive() {
    let (app, _system) = test_app().await;

    let req = post_json("/", cart_request("Create", json!([{ "productId": "P1" }])));
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({
            "statusCode": 200,
            "actions": [{ "action": "recalculate", "updateProductData": false }]
        })
    );
}

#[tokio::test]
async fn update_with_insufficient_stock_is_rejected() {
    let (app, _system) = test_app().await;

    let req = post_json(
        "/cart-validation",
        cart_request("Update", json!([{ "variant": { "sku": "ABC" }, "quantity": 5 }])),
    );
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({
            "statusCode": 400,
            "errors": [{
                "code": "InvalidOperation",
                "message": "stock level for ABC is less than 5"
            }]
        })
    );
}

#[tokio::test]
async fn update_within_stock_returns_no_actions() {
    let (app, _system) = test_app().await;

    let req = post_json(
        "/",
        cart_request("Update", json!([{ "variant": { "sku": "ABC" }, "quantity": 3 }])),
    );
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "statusCode": 200, "actions": [] }));
}

#[tokio::test]
async fn unknown_action_is_500_invalid_input() {
    let (app, _system) = test_app().await;

    let resp = app
        .oneshot(post_json("/", cart_request("Delete", json!([]))))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await;
    assert_eq!(body["errors"][0]["code"], "InvalidInput");
    assert_eq!(
        body["errors"][0]["message"],
        "resource not recognized; allowed: Create, Update"
    );
}

#[tokio::test]
async fn non_string_action_is_500_invalid_input() {
    let (app, _system) = test_app().await;

    for action in [json!(5), json!(true), json!(["Create"]), json!({ "name": "Create" })] {
        let mut body = cart_request("Create", json!([{ "productId": "P1" }]));
        body["action"] = action;
        let resp = app.clone().oneshot(post_json("/", body)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["statusCode"], 500);
        assert_eq!(body["errors"][0]["code"], "InvalidInput");
        assert_eq!(
            body["errors"][0]["message"],
            "resource not recognized; allowed: Create, Update"
        );
    }
}

#[tokio::test]
async fn missing_body_parameters_are_rejected() {
    let (app, _system) = test_app().await;

    let bodies = [
        json!({ "resource": { "typeId": "cart", "obj": {} } }),
        json!({ "action": "Create" }),
        json!({ "action": "Create", "resource": null }),
        json!({ "action": "", "resource": { "typeId": "cart" } }),
        json!({ "action": false, "resource": { "typeId": "cart" } }),
        json!({ "action": null, "resource": { "typeId": "cart" } }),
        json!({}),
    ];

    for body in bodies {
        let resp = app.clone().oneshot(post_json("/", body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["errors"][0]["code"], "InvalidOperation");
        assert_eq!(body["errors"][0]["message"], "missing body parameters");
    }
}

#[tokio::test]
async fn order_and_payment_resources_are_accepted_unchanged() {
    let (app, _system) = test_app().await;

    for type_id in ["order", "payment"] {
        let body = json!({ "action": "Create", "resource": { "typeId": type_id, "obj": {} } });
        let resp = app.clone().oneshot(post_json("/", body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({ "statusCode": 200, "actions": [] }));
    }
}

#[tokio::test]
async fn unknown_resource_type_is_500_invalid_input() {
    let (app, _system) = test_app().await;

    for resource in [json!({ "typeId": "customer" }), json!({ "obj": {} })] {
        let body = json!({ "action": "Create", "resource": resource });
        let resp = app.clone().oneshot(post_json("/", body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["errors"][0]["code"], "InvalidInput");
        assert_eq!(
            body["errors"][0]["message"],
            "resource not recognized; allowed: cart, order, payment"
        );
    }
}

#[tokio::test]
async fn malformed_json_gets_generic_internal_error() {
    let (app, _system) = test_app().await;

    let req = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({
            "errors": [{ "code": "InternalServerError", "message": "Internal server error" }]
        })
    );
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _system) = test_app().await;

    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");
}
