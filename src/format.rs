use crate::models::{ChatTurn, Content, Part};

/// Convert the UI's message format into the shape the Gemini API requires.
/// Order-preserving and 1:1; every turn becomes one content entry with a
/// single text part. The `assistant` alias is normalized to `model`, the
/// only non-user role Gemini accepts.
pub fn format_history(messages: &[ChatTurn]) -> Vec<Content> {
    messages
        .iter()
        .map(|message| {
            let role = if message.role == "assistant" {
                "model"
            } else {
                message.role.as_str()
            };
            Content {
                role: Some(role.to_string()),
                parts: vec![Part {
                    text: message.content.clone(),
                }],
            }
        })
        .collect()
}
