use rand::Rng;

/// Phrases that classify a reply as an order confirmation. Matched
/// case-insensitively anywhere in the text. This is a deliberate substring
/// heuristic, not language understanding; keep the phrase list in sync with
/// the system prompt.
const CONFIRMATION_PHRASES: [&str; 2] = ["order confirmed", "order placed"];

const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const TOKEN_LEN: usize = 8;

/// Generate an 8-character uppercase alphanumeric pickup token.
/// No uniqueness check against previously issued tokens.
pub fn generate_pickup_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LEN)
        .map(|_| TOKEN_CHARSET[rng.gen_range(0..TOKEN_CHARSET.len())] as char)
        .collect()
}

fn is_order_confirmation(reply: &str) -> bool {
    let lowered = reply.to_lowercase();
    CONFIRMATION_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}

/// Append a pickup-token sentence to replies that confirm an order;
/// return anything else unchanged.
pub fn append_pickup_token(reply: String) -> String {
    if !is_order_confirmation(&reply) {
        return reply;
    }
    let token = generate_pickup_token();
    tracing::info!("Order confirmed, issued pickup token {}", token);
    format!(
        "{reply} Your pickup token is **{token}**. Show it at the counter when you collect your order."
    )
}
