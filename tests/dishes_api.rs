mod common;

use axum::http::StatusCode;
use common::{app, error_of, send, send_raw};
use restaurant_api::dish_actor::PRICE_MESSAGE;
use serde_json::{json, Value};
use std::collections::HashSet;

fn taco() -> Value {
    json!({ "data": {
        "name": "Taco",
        "description": "Spicy",
        "price": 5,
        "image_url": "http://x"
    }})
}

#[tokio::test]
async fn create_returns_201_with_generated_id() {
    let app = app();
    let (status, body) = send(&app, "POST", "/dishes", Some(taco())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "data": {
            "id": "dish_1",
            "name": "Taco",
            "description": "Spicy",
            "price": 5,
            "image_url": "http://x"
        }})
    );
}

#[tokio::test]
async fn created_ids_are_unique_and_listed_in_order() {
    let app = app();
    let mut ids = Vec::new();
    for _ in 0..3 {
        let (status, body) = send(&app, "POST", "/dishes", Some(taco())).await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(body["data"]["id"].as_str().unwrap().to_string());
    }
    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), 3);

    let (status, body) = send(&app, "GET", "/dishes", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap())
        .collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn empty_list() {
    let (status, body) = send(&app(), "GET", "/dishes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": [] }));
}

#[tokio::test]
async fn create_reports_first_missing_field() {
    let app = app();
    let (status, body) = send(&app, "POST", "/dishes", Some(json!({ "data": {} }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), "Dish must include a name");

    let mut body = taco();
    body["data"]["image_url"] = json!("");
    let (status, body) = send(&app, "POST", "/dishes", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), "Dish must include an image_url");
}

#[tokio::test]
async fn body_without_data_is_treated_as_empty() {
    let (status, body) = send(&app(), "POST", "/dishes", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), "Dish must include a name");
}

#[tokio::test]
async fn create_rejects_bad_prices() {
    let app = app();
    for price in [json!(0), json!(-5), json!(1.5), json!("5"), json!(null)] {
        let mut body = taco();
        body["data"]["price"] = price.clone();
        let (status, body) = send(&app, "POST", "/dishes", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "price {price}");
        assert_eq!(error_of(&body), PRICE_MESSAGE);
    }

    // Nothing was stored along the way.
    let (_, body) = send(&app, "GET", "/dishes", None).await;
    assert_eq!(body, json!({ "data": [] }));
}

#[tokio::test]
async fn read_existing_and_missing() {
    let app = app();
    send(&app, "POST", "/dishes", Some(taco())).await;

    let (status, body) = send(&app, "GET", "/dishes/dish_1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Taco");

    let (status, body) = send(&app, "GET", "/dishes/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_of(&body), "Dish does not exist: nope.");
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_id() {
    let app = app();
    send(&app, "POST", "/dishes", Some(taco())).await;

    let update = json!({ "data": {
        "id": "dish_1",
        "name": "Burrito",
        "description": "Huge",
        "price": 9,
        "image_url": "http://b"
    }});
    let (status, body) = send(&app, "PUT", "/dishes/dish_1", Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "dish_1");
    assert_eq!(body["data"]["name"], "Burrito");
    assert_eq!(body["data"]["price"], 9);

    let (_, body) = send(&app, "GET", "/dishes/dish_1", None).await;
    assert_eq!(body["data"]["description"], "Huge");
}

#[tokio::test]
async fn update_without_body_id_is_accepted() {
    let app = app();
    send(&app, "POST", "/dishes", Some(taco())).await;
    let (status, _) = send(&app, "PUT", "/dishes/dish_1", Some(taco())).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn update_rejects_mismatched_id() {
    let app = app();
    send(&app, "POST", "/dishes", Some(taco())).await;

    let mut update = taco();
    update["data"]["id"] = json!("dish_7");
    let (status, body) = send(&app, "PUT", "/dishes/dish_1", Some(update)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_of(&body),
        "Dish id does not match route id. Dish: dish_7, Route: dish_1."
    );
}

#[tokio::test]
async fn update_missing_dish_is_404_before_field_checks() {
    let (status, body) = send(&app(), "PUT", "/dishes/dish_3", Some(json!({ "data": {} }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_of(&body), "Dish does not exist: dish_3.");
}

#[tokio::test]
async fn delete_is_not_allowed() {
    let app = app();
    send(&app, "POST", "/dishes", Some(taco())).await;

    let (status, body) = send(&app, "DELETE", "/dishes/dish_1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(error_of(&body), "DELETE not allowed for /dishes/dish_1");

    let (status, _) = send(&app, "PUT", "/dishes", Some(taco())).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let (status, body) = send(&app(), "GET", "/menu", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_of(&body), "Path not found: /menu");
}

/// No body at all, an empty JSON body, or a non-JSON content type all read as `data: {}`.
#[tokio::test]
async fn missing_body_reports_first_missing_field() {
    let app = app();

    let (status, body) = send(&app, "POST", "/dishes", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), "Dish must include a name");

    let (status, body) = send_raw(&app, "POST", "/dishes", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), "Dish must include a name");

    send(&app, "POST", "/dishes", Some(taco())).await;
    let (status, body) = send(&app, "PUT", "/dishes/dish_1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), "Dish must include a name");
}

#[tokio::test]
async fn malformed_json_is_400() {
    let (status, body) = send_raw(&app(), "POST", "/dishes", "{\"data\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_of(&body).starts_with("Failed to parse the request body as JSON"));
}
