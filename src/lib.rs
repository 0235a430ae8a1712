pub mod config;
pub mod error;
pub mod format;
pub mod handlers;
pub mod models;
pub mod pickup;
pub mod prompt;
pub mod redis;
pub mod repository;
pub mod repository_traits;
pub mod transport;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::handlers::AppState;
use crate::redis::RedisManager;
use crate::repository::RedisRepository;
use crate::transport::GeminiTransport;

/// Wire up the production service handles from configuration.
pub async fn build_state(config: Config) -> Result<AppState> {
    let config = Arc::new(config);
    let redis_manager = Arc::new(RedisManager::new_with_config(&config).await?);
    let repository = Arc::new(RedisRepository::new(redis_manager));
    let transport = Arc::new(GeminiTransport::new(
        config.gemini.api_key.clone(),
        config.gemini.model.clone(),
    ));

    Ok(AppState {
        transport,
        feedback: repository.clone(),
        orders: repository,
        config,
    })
}
