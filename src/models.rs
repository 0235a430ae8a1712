use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One turn of the visible conversation, as submitted by the UI.
/// Roles are `user` for the customer and `model` (or `assistant`) for the bot.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

/// Body of `POST /api/chat`
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
}

/// Success body of `POST /api/chat`
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub content: String,
}

/// Body of `POST /api/feedback`. Rating is required by the contract but kept
/// optional here so its absence maps to a 400 instead of a deserialization
/// failure.
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub rating: Option<f64>,
    pub feedback: Option<String>,
}

/// Feedback record as stored. Append-only.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FeedbackRecord {
    pub id: String,
    pub rating: f64,
    pub feedback: Option<String>,
    pub timestamp: String,
}

impl FeedbackRecord {
    /// Create a new feedback record with generated ID and timestamp
    pub fn new(rating: f64, feedback: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            rating,
            feedback,
            timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }
}

/// One entry in a customer's order history.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub description: String,
    pub date: String,
    pub user_id: String,
}

/// Success body for `POST /api/feedback` and the chat health check
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// Gemini generateContent wire format

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("")
    }
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub max_output_tokens: u32,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}
