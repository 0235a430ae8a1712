use async_trait::async_trait;
use reqwest::Client;

use crate::error::{CoffeeSupportError, Result};
use crate::models::{GenerateRequest, GenerateResponse};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gateway to the generative-language capability. One network call per
/// invocation, no retries; callers decide how to recover.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn generate(&self, req: &GenerateRequest) -> Result<String>;
}

pub struct GeminiTransport {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiTransport {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.model)
    }
}

#[async_trait]
impl Transport for GeminiTransport {
    async fn generate(&self, req: &GenerateRequest) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(req)
            .send()
            .await
            .map_err(|e| {
                CoffeeSupportError::Upstream(format!("Failed to send request to Gemini API: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CoffeeSupportError::Upstream(format!(
                "Gemini API returned {status}: {body}"
            )));
        }

        let generated: GenerateResponse = response.json().await.map_err(|e| {
            CoffeeSupportError::Upstream(format!("Failed to parse Gemini API response: {e}"))
        })?;

        // A blocked prompt comes back with no candidates and a block reason;
        // a blocked completion comes back as a candidate finished with SAFETY.
        if let Some(feedback) = &generated.prompt_feedback {
            if let Some(reason) = &feedback.block_reason {
                tracing::warn!("Gemini blocked the prompt: {}", reason);
                return Err(CoffeeSupportError::SafetyRefusal);
            }
        }

        let Some(candidate) = generated.candidates.first() else {
            return Err(CoffeeSupportError::Upstream(
                "Gemini API returned no candidates".to_string(),
            ));
        };

        if candidate.finish_reason.as_deref() == Some("SAFETY") {
            tracing::warn!("Gemini stopped the completion for safety reasons");
            return Err(CoffeeSupportError::SafetyRefusal);
        }

        match &candidate.content {
            Some(content) => Ok(content.text()),
            None => Err(CoffeeSupportError::Upstream(
                "Gemini API candidate had no content".to_string(),
            )),
        }
    }
}
