//! HostedHooks notifier.
//!
//! Builds the notification envelope, POSTs it to the configured HostedHooks
//! application and logs the outcome. Delivery is fire-and-forget: the
//! [`Notifier`] boundary discards every error after logging it, and nothing
//! is retried.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, error, info};
use userhooks_protocol::NotificationEnvelope;

use crate::config::HostedHooksConfig;
use crate::error::{NotifyError, Result};

/// Delivers a domain event to the webhook relay.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `payload` under `event_type`. Never fails from the caller's view.
    async fn send_webhook_message(&self, event_type: &str, payload: Value);
}

/// Successful relay response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// HTTP status code (2xx)
    pub status: u16,
    /// Raw response body
    pub body: String,
}

/// [`Notifier`] backed by the HostedHooks messages API.
#[derive(Debug, Clone)]
pub struct HostedHooksNotifier {
    client: reqwest::Client,
    config: HostedHooksConfig,
}

impl HostedHooksNotifier {
    /// Build a notifier with its own HTTP client.
    pub fn new(config: HostedHooksConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| NotifyError::ConfigurationError {
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self::with_client(client, config))
    }

    /// Build a notifier around an existing HTTP client.
    pub fn with_client(client: reqwest::Client, config: HostedHooksConfig) -> Self {
        Self { client, config }
    }

    /// POST one envelope and report the outcome.
    ///
    /// Non-2xx responses are returned as [`NotifyError::HttpStatus`].
    pub async fn deliver(&self, event_type: &str, payload: Value) -> Result<DeliveryReceipt> {
        let url = self.config.messages_url();
        let body = NotificationEnvelope::new(event_type, payload).to_json()?;

        debug!(event_type, url = %url, "Posting webhook message");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.config.bearer_token())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(NotifyError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(DeliveryReceipt {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl Notifier for HostedHooksNotifier {
    async fn send_webhook_message(&self, event_type: &str, payload: Value) {
        match self.deliver(event_type, payload).await {
            Ok(receipt) => {
                info!(event_type, status = receipt.status, response = %receipt.body, "Webhook message accepted");
            }
            Err(e) => {
                error!(event_type, error = %e, "Webhook message delivery failed");
            }
        }
    }
}
