use anyhow::Context;
use async_trait::async_trait;

use super::MessagingProvider;
use crate::models::{OutboundMessage, ReplyRequest};

pub struct LineMessagingProvider {
    api_url: String,
    access_token: String,
    client: reqwest::Client,
}

impl LineMessagingProvider {
    pub fn new(api_url: String, access_token: String) -> Self {
        Self {
            api_url,
            access_token,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl MessagingProvider for LineMessagingProvider {
    async fn reply(&self, reply_token: &str, messages: &[OutboundMessage]) -> anyhow::Result<()> {
        let url = format!("{}/v2/bot/message/reply", self.api_url.trim_end_matches('/'));

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&ReplyRequest {
                reply_token,
                messages,
            })
            .send()
            .await
            .context("failed to send LINE reply")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("LINE API error ({}): {}", status, body);
        }

        Ok(())
    }
}
