mod common;

use axum::http::StatusCode;
use common::{error_of, send};
use restaurant_api::clients::{ActorClient, DishClient, OrderClient};
use restaurant_api::error::ApiError;
use restaurant_api::framework::{mock::MockClient, FrameworkError};
use restaurant_api::http::{self, AppState};
use restaurant_api::model::{Dish, LineItem, Order, OrderStatus, OrderUpdate};
use restaurant_api::order_actor::{DELIVERED_MESSAGE, NOT_PENDING_MESSAGE};

fn sample_order(status: OrderStatus) -> Order {
    Order {
        id: "order_1".into(),
        deliver_to: "123 Main".into(),
        mobile_number: "555-1234".into(),
        status,
        dishes: vec![LineItem::new("d1", 2)],
    }
}

/// Pattern: client over a mock
/// - No actor runs; the mock scripts each framework response
/// - Checks how the client translates framework errors into `ApiError`
#[tokio::test]
async fn hook_rejections_surface_unchanged() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_update("order_1".to_string())
        .return_err(FrameworkError::EntityError(Box::new(ApiError::Conflict(
            DELIVERED_MESSAGE.into(),
        ))));
    mock.expect_delete("order_1".to_string())
        .return_err(FrameworkError::EntityError(Box::new(ApiError::Conflict(
            NOT_PENDING_MESSAGE.into(),
        ))));

    let client = OrderClient::new(mock.client());
    let update = OrderUpdate {
        deliver_to: "9 Elm".into(),
        mobile_number: "555-9999".into(),
        status: OrderStatus::Preparing,
    };
    let err = client.update_order("order_1".into(), update).await.unwrap_err();
    assert_eq!(err, ApiError::Conflict(DELIVERED_MESSAGE.into()));

    let err = client.delete_order("order_1".into()).await.unwrap_err();
    assert_eq!(err, ApiError::Conflict(NOT_PENDING_MESSAGE.into()));

    mock.verify();
}

#[tokio::test]
async fn framework_not_found_becomes_resource_message() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_delete("order_9".to_string())
        .return_err(FrameworkError::NotFound("order_9".into()));

    let client = OrderClient::new(mock.client());
    let err = client.delete_order("order_9".into()).await.unwrap_err();
    assert_eq!(err, ApiError::NotFound("Order does not exist: order_9.".into()));
    mock.verify();
}

#[tokio::test]
async fn dead_actor_is_internal() {
    let mut mock = MockClient::<Dish>::new();
    mock.expect_list().return_err(FrameworkError::ActorDropped);

    let client = DishClient::new(mock.client());
    let err = client.list().await.unwrap_err();
    assert!(matches!(err, ApiError::Internal(_)));
    mock.verify();
}

/// Pattern: router over mocks
/// - The real handlers run against scripted clients
#[tokio::test]
async fn handlers_render_actor_failures_as_500() {
    let mut dishes = MockClient::<Dish>::new();
    let orders = MockClient::<Order>::new();
    dishes.expect_list().return_err(FrameworkError::ActorClosed);

    let app = http::app(AppState {
        dishes: DishClient::new(dishes.client()),
        orders: OrderClient::new(orders.client()),
    });

    let (status, body) = send(&app, "GET", "/dishes", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_of(&body), "Actor closed");
    dishes.verify();
    orders.verify();
}

/// The handler reports the hook's verdict when the order changed between the pipeline's
/// lookup and the write.
#[tokio::test]
async fn handler_reports_hook_rejection_after_passing_pipeline() {
    let dishes = MockClient::<Dish>::new();
    let mut orders = MockClient::<Order>::new();
    orders
        .expect_get("order_1".to_string())
        .return_ok(Some(sample_order(OrderStatus::Pending)));
    orders
        .expect_delete("order_1".to_string())
        .return_err(FrameworkError::EntityError(Box::new(ApiError::Conflict(
            NOT_PENDING_MESSAGE.into(),
        ))));

    let app = http::app(AppState {
        dishes: DishClient::new(dishes.client()),
        orders: OrderClient::new(orders.client()),
    });

    let (status, body) = send(&app, "DELETE", "/orders/order_1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), NOT_PENDING_MESSAGE);
    orders.verify();
}
