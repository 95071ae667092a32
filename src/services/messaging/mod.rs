pub mod line;

use async_trait::async_trait;

use crate::models::OutboundMessage;

#[async_trait]
pub trait MessagingProvider: Send + Sync {
    async fn reply(&self, reply_token: &str, messages: &[OutboundMessage]) -> anyhow::Result<()>;
}
