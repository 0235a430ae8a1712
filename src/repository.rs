use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{FeedbackRecord, OrderRecord};
use crate::redis::RedisManager;
use crate::repository_traits::{FeedbackRepository, OrderRepository};

/// Redis implementation of the feedback and order repositories
pub struct RedisRepository {
    redis: Arc<RedisManager>,
}

impl RedisRepository {
    pub fn new(redis: Arc<RedisManager>) -> Self {
        Self { redis }
    }

    fn feedback_key(&self, id: &str) -> String {
        format!("feedback:{}", id)
    }

    fn orders_key(&self, user_id: &str) -> String {
        format!("orders:{}", user_id)
    }
}

#[async_trait]
impl FeedbackRepository for RedisRepository {
    async fn save_feedback(&self, record: &FeedbackRecord) -> Result<()> {
        let key = self.feedback_key(&record.id);
        self.redis.json_set(&key, "$", record).await?;
        tracing::info!("Stored feedback {} (rating {})", record.id, record.rating);
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for RedisRepository {
    async fn get_orders(&self, user_id: &str) -> Result<Vec<OrderRecord>> {
        let key = self.orders_key(user_id);
        let orders: Option<Vec<OrderRecord>> = self.redis.json_get(&key, "$").await?;
        Ok(orders.unwrap_or_default())
    }
}
