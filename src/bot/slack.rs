use anyhow::Context;
use tracing::trace;
use url::Url;

use crate::bot::message::SlackMessage;

/// Thin client around the configured Slack incoming webhook. Sends and reports
/// failure, nothing more: no retries, no backoff.
pub struct SlackClient {
    http: reqwest::Client,
    webhook_url: Url,
}

impl SlackClient {
    pub fn new(webhook_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            webhook_url,
        }
    }

    pub async fn send(&self, message: &SlackMessage) -> anyhow::Result<()> {
        trace!("posting payload: {:?}", message);

        self.http
            .post(self.webhook_url.clone())
            .json(message)
            .send()
            .await
            .context("couldn't reach the Slack webhook")?
            .error_for_status()
            .context("Slack webhook rejected the payload")?;

        Ok(())
    }
}
