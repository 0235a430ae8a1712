use crate::error::Result;
use crate::models::{FeedbackRecord, OrderRecord};
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync + 'static {
    /// Append one feedback record. There is no update or delete.
    async fn save_feedback(&self, record: &FeedbackRecord) -> Result<()>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    /// Fetch every order belonging to the given user. Ordering is whatever
    /// the store returns.
    async fn get_orders(&self, user_id: &str) -> Result<Vec<OrderRecord>>;
}
