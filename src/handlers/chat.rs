use axum::Json;
use axum::extract::State;

use crate::config::Config;
use crate::error::{CoffeeSupportError, Result};
use crate::format::format_history;
use crate::models::{ChatRequest, ChatResponse, ChatTurn, Content, GenerateRequest, GenerationConfig, MessageResponse, Part};
use crate::pickup::append_pickup_token;
use crate::prompt::{SAFETY_FALLBACK_REPLY, SYSTEM_PROMPT};
use crate::transport::Transport;

use super::AppState;

/// One chat turn: validate, format, invoke the model, post-process, trim.
/// At most one upstream call; a safety refusal is recovered with the fixed
/// fallback reply, anything else aborts.
pub async fn run_chat_turn(
    transport: &dyn Transport,
    config: &Config,
    messages: &[ChatTurn],
) -> Result<String> {
    if messages.is_empty() || messages[0].role != "user" {
        return Err(CoffeeSupportError::InvalidFirstMessage);
    }

    let request = GenerateRequest {
        system_instruction: Content {
            role: None,
            parts: vec![Part {
                text: SYSTEM_PROMPT.to_string(),
            }],
        },
        contents: format_history(messages),
        generation_config: GenerationConfig {
            max_output_tokens: config.gemini.max_output_tokens,
        },
    };

    let reply = match transport.generate(&request).await {
        Ok(text) => text,
        Err(CoffeeSupportError::SafetyRefusal) => {
            tracing::warn!("Model refused to answer, substituting fallback reply");
            SAFETY_FALLBACK_REPLY.to_string()
        }
        Err(e) => return Err(e),
    };

    Ok(append_pickup_token(reply).trim().to_string())
}

/// POST /api/chat
pub async fn chat_post(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let content = run_chat_turn(state.transport.as_ref(), &state.config, &request.messages).await?;
    Ok(Json(ChatResponse { content }))
}

/// GET /api/chat - static health-check payload
pub async fn chat_get() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from chat API!".to_string(),
    })
}
