use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;

use crate::error::{CoffeeSupportError, Result};
use crate::models::OrderRecord;

use super::AppState;

/// GET /api/orders - requires the caller's identity in the `user-id` header
pub async fn orders_get(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<OrderRecord>>> {
    let user_id = headers
        .get("user-id")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or(CoffeeSupportError::MissingUserId)?;

    let orders = state.orders.get_orders(user_id).await?;
    tracing::info!("Fetched {} orders for user {}", orders.len(), user_id);
    Ok(Json(orders))
}
