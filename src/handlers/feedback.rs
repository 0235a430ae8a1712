use axum::Json;
use axum::extract::State;

use crate::error::{CoffeeSupportError, Result};
use crate::models::{FeedbackRecord, FeedbackRequest, MessageResponse};

use super::AppState;

/// POST /api/feedback
pub async fn feedback_post(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<MessageResponse>> {
    let Some(rating) = request.rating else {
        tracing::warn!("Feedback submission without rating");
        return Err(CoffeeSupportError::MissingRating);
    };

    let record = FeedbackRecord::new(rating, request.feedback);
    state.feedback.save_feedback(&record).await?;

    Ok(Json(MessageResponse {
        message: "Feedback submitted successfully.".to_string(),
    }))
}
