use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hiddenhaul::products::{ProductKind, UpdateProduct};
use hiddenhaul::HiddenHaul;

fn gatsby() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "The Great Gatsby",
        "image": "https://images.example.com/gatsby.jpg",
        "type": "book",
        "price": 45.0,
        "rating": 4.5
    })
}

#[tokio::test]
async fn list_unwraps_the_data_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("type", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [gatsby()]
        })))
        .mount(&mock_server)
        .await;

    let client = HiddenHaul::new(&mock_server.uri());
    let products = client.products().list(None).await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].name, "The Great Gatsby");
    assert_eq!(products[0].kind, ProductKind::Book);
    assert_eq!(products[0].price, 45.0);
}

#[tokio::test]
async fn list_filters_by_section() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("type", "clothes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HiddenHaul::new(&mock_server.uri());
    let products = client
        .products()
        .list(Some(ProductKind::Clothes))
        .await
        .unwrap();

    assert!(products.is_empty());
}

#[tokio::test]
async fn missing_data_resolves_to_an_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = HiddenHaul::new(&mock_server.uri());
    let products = client.products().list(None).await.unwrap();

    assert!(products.is_empty());
}

#[tokio::test]
async fn get_returns_a_single_product() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": gatsby()
        })))
        .mount(&mock_server)
        .await;

    let client = HiddenHaul::new(&mock_server.uri());
    let product = client.products().get(1).await.unwrap();

    assert_eq!(product.name, "The Great Gatsby");
    assert_eq!(product.rating, 4.5);
}

#[tokio::test]
async fn update_sends_the_listing_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/products/1"))
        .and(body_json(json!({
            "name": "The Great Gatsby",
            "description": "Classic American novel",
            "category": "Fiction",
            "condition": "good"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": gatsby()
        })))
        .mount(&mock_server)
        .await;

    let client = HiddenHaul::new(&mock_server.uri());
    let payload = UpdateProduct {
        name: "The Great Gatsby".to_string(),
        description: "Classic American novel".to_string(),
        category: "Fiction".to_string(),
        condition: "good".to_string(),
    };

    let product = client.products().update(1, &payload).await.unwrap();
    assert_eq!(product.id, 1);
}

#[tokio::test]
async fn delete_targets_the_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/products/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HiddenHaul::new(&mock_server.uri());
    client.products().delete(4).await.unwrap();
}

#[tokio::test]
async fn pending_approval_reads_the_moderation_feed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/not-approved"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [gatsby()]
        })))
        .mount(&mock_server)
        .await;

    let client = HiddenHaul::new(&mock_server.uri());
    let pending = client.products().pending_approval().await.unwrap();

    assert_eq!(pending.len(), 1);
}

#[tokio::test]
async fn add_comment_posts_text_and_rating() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/products/1/comments"))
        .and(body_json(json!({ "comment": "Lovely copy", "rating": 5 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "comment": "Lovely copy",
            "rating": 5
        })))
        .mount(&mock_server)
        .await;

    let client = HiddenHaul::new(&mock_server.uri());
    let comment = client.products().add_comment(1, "Lovely copy", 5).await.unwrap();

    assert_eq!(comment.id, Some(12));
    assert_eq!(comment.comment, "Lovely copy");
}

#[tokio::test]
async fn add_favorite_posts_the_product_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/favorites"))
        .and(body_json(json!({ "productId": 1 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HiddenHaul::new(&mock_server.uri());
    client.products().add_favorite(1).await.unwrap();
}

#[tokio::test]
async fn api_errors_surface_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let client = HiddenHaul::new(&mock_server.uri());
    let err = client.products().get(99).await.unwrap_err();

    match err {
        hiddenhaul::error::Error::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "not found");
        }
        other => panic!("expected an API error, got {:?}", other),
    }
}
