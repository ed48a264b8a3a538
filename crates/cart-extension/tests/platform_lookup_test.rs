//! Contract tests for `PlatformLookup` against a simulated platform API.
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | POST   | `/oauth/token` | `token_*` |
//! | GET    | `/{project}/products/{id}` | `get_product_*` |
//! | GET    | `/{project}/inventory` | `get_inventory_entry_*` |

use cart_extension::lookup::{LookupError, PlatformConfig, PlatformLookup, ResourceLookup};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a lookup whose API and auth URLs both point at the mock server.
fn test_lookup(mock_server: &MockServer) -> PlatformLookup {
    PlatformLookup::new(PlatformConfig {
        project_key: "shop".into(),
        client_id: "client".into(),
        client_secret: "secret".into(),
        scope: Some("view_products:shop".into()),
        api_url: format!("{}/", mock_server.uri()),
        auth_url: mock_server.uri(),
        timeout_secs: 5,
    })
    .unwrap()
}

async fn mount_token(mock_server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "test-token",
            "token_type": "Bearer",
            "expires_in": 172800,
            "scope": "view_products:shop"
        })))
        .expect(expected_calls)
        .mount(mock_server)
        .await;
}

// -- GET /{project}/products/{id} ---------------------------------------------

#[tokio::test]
async fn get_product_sends_bearer_token_and_maps_body() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/shop/products/P1"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "P1",
            "version": 4,
            "key": "widget",
            "masterData": {
                "current": { "name": { "de": "Ding", "en": "Widget" } },
                "published": true
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let lookup = test_lookup(&mock_server);
    let product = lookup.get_product("P1").await.unwrap().unwrap();
    assert_eq!(product.id, "P1");
    assert_eq!(product.key.as_deref(), Some("widget"));
    assert_eq!(product.name.as_deref(), Some("Widget"));
}

#[tokio::test]
async fn get_product_404_is_absence() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/shop/products/P404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let lookup = test_lookup(&mock_server);
    assert_eq!(lookup.get_product("P404").await.unwrap(), None);
}

#[tokio::test]
async fn get_product_5xx_is_transport_failure() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/shop/products/P1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let lookup = test_lookup(&mock_server);
    let err = lookup.get_product("P1").await.unwrap_err();
    match err {
        LookupError::Transport { message, .. } => {
            assert!(message.contains("503"));
            assert!(message.contains("maintenance"));
        }
        other => panic!("Expected Transport, got {other:?}"),
    }
}

#[tokio::test]
async fn get_product_unreadable_body_is_decode_failure() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/shop/products/P1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;

    let lookup = test_lookup(&mock_server);
    assert!(matches!(
        lookup.get_product("P1").await,
        Err(LookupError::Decode { .. })
    ));
}

// -- GET /{project}/inventory -------------------------------------------------

#[tokio::test]
async fn get_inventory_entry_queries_by_exact_sku() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/shop/inventory"))
        .and(query_param("where", "sku=\"ABC\""))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "limit": 1,
            "offset": 0,
            "count": 1,
            "results": [{
                "id": "inv-1",
                "version": 2,
                "sku": "ABC",
                "quantityOnStock": 4,
                "availableQuantity": 3
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let lookup = test_lookup(&mock_server);
    let entry = lookup.get_inventory_entry("ABC").await.unwrap().unwrap();
    assert_eq!(entry.sku, "ABC");
    assert_eq!(entry.available_quantity, 3);
    assert_eq!(entry.quantity_on_stock, 4);
}

#[tokio::test]
async fn get_inventory_entry_empty_results_is_absence() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/shop/inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "limit": 1, "offset": 0, "count": 0, "results": []
        })))
        .mount(&mock_server)
        .await;

    let lookup = test_lookup(&mock_server);
    assert_eq!(lookup.get_inventory_entry("NOPE").await.unwrap(), None);
}

// -- POST /oauth/token --------------------------------------------------------

#[tokio::test]
async fn token_is_fetched_once_and_reused() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, 1).await;

    Mock::given(method("GET"))
        .and(path("/shop/inventory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{ "sku": "ABC", "availableQuantity": 3 }]
        })))
        .expect(3)
        .mount(&mock_server)
        .await;

    let lookup = test_lookup(&mock_server);
    for _ in 0..3 {
        assert!(lookup.get_inventory_entry("ABC").await.unwrap().is_some());
    }
}

#[tokio::test]
async fn token_rejection_is_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "statusCode": 401,
            "message": "Please provide valid client credentials."
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/shop/products/P1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let lookup = test_lookup(&mock_server);
    let err = lookup.get_product("P1").await.unwrap_err();
    assert!(matches!(err, LookupError::Transport { ref endpoint, .. } if endpoint == "POST /oauth/token"));
}

#[tokio::test]
async fn unreachable_platform_is_transport_failure() {
    let lookup = PlatformLookup::new(PlatformConfig {
        project_key: "shop".into(),
        client_id: "client".into(),
        client_secret: "secret".into(),
        scope: None,
        api_url: "http://127.0.0.1:9".into(),
        auth_url: "http://127.0.0.1:9".into(),
        timeout_secs: 1,
    })
    .unwrap();

    assert!(matches!(
        lookup.get_inventory_entry("ABC").await,
        Err(LookupError::Transport { .. })
    ));
}
