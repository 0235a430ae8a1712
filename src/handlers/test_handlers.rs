use super::*;
use crate::error::{CoffeeSupportError, Result};
use crate::models::{GenerateRequest, OrderRecord};
use crate::repository_traits::{MockFeedbackRepository, MockOrderRepository};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Transport double returning a fixed outcome for every request
struct FixedTransport {
    reply: Result<&'static str>,
}

#[async_trait]
impl Transport for FixedTransport {
    async fn generate(&self, _req: &GenerateRequest) -> Result<String> {
        match &self.reply {
            Ok(text) => Ok((*text).to_string()),
            Err(CoffeeSupportError::SafetyRefusal) => Err(CoffeeSupportError::SafetyRefusal),
            Err(e) => Err(CoffeeSupportError::Upstream(e.to_string())),
        }
    }
}

fn test_router(
    reply: Result<&'static str>,
    feedback: MockFeedbackRepository,
    orders: MockOrderRepository,
) -> Router {
    let state = AppState {
        transport: Arc::new(FixedTransport { reply }),
        feedback: Arc::new(feedback),
        orders: Arc::new(orders),
        config: Arc::new(Config::default()),
    };
    router(state)
}

fn default_router(reply: Result<&'static str>) -> Router {
    test_router(reply, MockFeedbackRepository::new(), MockOrderRepository::new())
}

async fn send_json(router: Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_chat_success_returns_trimmed_content() {
    let router = default_router(Ok("  Our Latte is $4.50.  "));
    let (status, body) = send_json(
        router,
        "POST",
        "/api/chat",
        json!({ "messages": [{ "role": "user", "content": "How much is a latte?" }] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "Our Latte is $4.50.");
}

#[tokio::test]
async fn test_chat_order_confirmation_appends_token() {
    let router = default_router(Ok("Order confirmed! Your Latte will be ready shortly."));
    let (status, body) = send_json(
        router,
        "POST",
        "/api/chat",
        json!({ "messages": [{ "role": "user", "content": "I'd like a Latte" }] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let content = body["content"].as_str().unwrap();
    assert!(content.starts_with("Order confirmed! Your Latte will be ready shortly."));
    assert!(content.contains("Your pickup token is **"));
}

#[tokio::test]
async fn test_chat_empty_messages_is_client_error() {
    let router = default_router(Ok("unused"));
    let (status, body) = send_json(router, "POST", "/api/chat", json!({ "messages": [] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "First message should be from the user.");
}

#[tokio::test]
async fn test_chat_model_first_is_client_error() {
    let router = default_router(Ok("unused"));
    let (status, body) = send_json(
        router,
        "POST",
        "/api/chat",
        json!({ "messages": [{ "role": "model", "content": "Hi!" }] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "First message should be from the user.");
}

#[tokio::test]
async fn test_chat_upstream_failure_is_server_error() {
    let router = default_router(Err(CoffeeSupportError::Upstream("quota exceeded".into())));
    let (status, body) = send_json(
        router,
        "POST",
        "/api/chat",
        json!({ "messages": [{ "role": "user", "content": "hello" }] }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("quota exceeded"));
}

#[tokio::test]
async fn test_chat_safety_refusal_still_succeeds() {
    let router = default_router(Err(CoffeeSupportError::SafetyRefusal));
    let (status, body) = send_json(
        router,
        "POST",
        "/api/chat",
        json!({ "messages": [{ "role": "user", "content": "something inappropriate" }] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], crate::prompt::SAFETY_FALLBACK_REPLY);
}

#[tokio::test]
async fn test_chat_get_health_payload() {
    let router = default_router(Ok("unused"));
    let request = Request::builder()
        .method("GET")
        .uri("/api/chat")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "Hello from chat API!");
}

#[tokio::test]
async fn test_feedback_missing_rating_is_client_error() {
    let mut feedback = MockFeedbackRepository::new();
    feedback.expect_save_feedback().never();
    let router = test_router(Ok("unused"), feedback, MockOrderRepository::new());
    let (status, body) = send_json(
        router,
        "POST",
        "/api/feedback",
        json!({ "feedback": "great" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Rating is required.");
}

#[tokio::test]
async fn test_feedback_saved_with_rating() {
    let mut feedback = MockFeedbackRepository::new();
    feedback
        .expect_save_feedback()
        .withf(|record| record.rating == 5.0 && record.feedback.as_deref() == Some("great coffee"))
        .once()
        .returning(|_| Ok(()));
    let router = test_router(Ok("unused"), feedback, MockOrderRepository::new());
    let (status, body) = send_json(
        router,
        "POST",
        "/api/feedback",
        json!({ "rating": 5, "feedback": "great coffee" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Feedback submitted successfully.");
}

#[tokio::test]
async fn test_feedback_store_failure_is_server_error() {
    let mut feedback = MockFeedbackRepository::new();
    feedback
        .expect_save_feedback()
        .returning(|_| Err(CoffeeSupportError::Upstream("store down".into())));
    let router = test_router(Ok("unused"), feedback, MockOrderRepository::new());
    let (status, _) = send_json(router, "POST", "/api/feedback", json!({ "rating": 3 })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_orders_without_identity_is_client_error() {
    let router = default_router(Ok("unused"));
    let request = Request::builder()
        .method("GET")
        .uri("/api/orders")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "User ID is required");
}

#[tokio::test]
async fn test_orders_returned_for_user() {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_get_orders()
        .withf(|user_id| user_id == "user-123")
        .once()
        .returning(|user_id| {
            Ok(vec![OrderRecord {
                id: "order-1".to_string(),
                description: "Latte and a croissant".to_string(),
                date: "2024-05-01T10:00:00Z".to_string(),
                user_id: user_id.to_string(),
            }])
        });
    let router = test_router(Ok("unused"), MockFeedbackRepository::new(), orders);
    let request = Request::builder()
        .method("GET")
        .uri("/api/orders")
        .header("user-id", "user-123")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body[0]["id"], "order-1");
    assert_eq!(body[0]["description"], "Latte and a croissant");
    assert_eq!(body[0]["userId"], "user-123");
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = default_router(Ok("unused"));
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
