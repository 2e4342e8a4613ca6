// src/services/notifier.rs

//! Notification dispatch through the Telegram Bot API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{Credentials, NotifierConfig, Record};
use crate::utils::http;

/// Sends one message per new record.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a notification for `record`. Failures are not retried.
    async fn send(&self, record: &Record) -> Result<()>;
}

/// Error body returned by the Bot API.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Posts `sendMessage` requests to a Telegram bot endpoint.
pub struct TelegramNotifier {
    client: Client,
    endpoint: Url,
    chat_id: String,
    parse_mode: String,
    template: String,
}

impl TelegramNotifier {
    /// Create a notifier from the messaging config and credentials.
    pub fn new(config: &NotifierConfig, credentials: &Credentials) -> Result<Self> {
        let client = http::create_client(
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            config.timeout_secs,
        )?;
        Self::with_client(client, config, credentials)
    }

    /// Create a notifier around an existing client.
    pub fn with_client(
        client: Client,
        config: &NotifierConfig,
        credentials: &Credentials,
    ) -> Result<Self> {
        let endpoint = Url::parse(&format!(
            "{}/bot{}/sendMessage",
            config.api_base.trim_end_matches('/'),
            credentials.bot_token
        ))?;

        Ok(Self {
            client,
            endpoint,
            chat_id: credentials.chat_id.clone(),
            parse_mode: config.parse_mode.clone(),
            template: config.message_template.clone(),
        })
    }

    /// Render the message text for a record.
    pub fn message(&self, record: &Record) -> String {
        record.format(&self.template)
    }

    fn describe_failure(body: &str) -> String {
        match serde_json::from_str::<ApiResponse>(body) {
            Ok(ApiResponse {
                ok: false,
                description: Some(description),
            }) => description,
            _ => body.trim().to_string(),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, record: &Record) -> Result<()> {
        let text = self.message(record);
        let params = [
            ("chat_id", self.chat_id.as_str()),
            ("text", text.as_str()),
            ("parse_mode", self.parse_mode.as_str()),
        ];

        let response = self
            .client
            .post(self.endpoint.clone())
            .form(&params)
            .send()
            .await
            // The endpoint URL carries the bot token.
            .map_err(|e| AppError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::notify(status, Self::describe_failure(&body)));
        }

        log::info!("Sent: {}", record.identifier);
        Ok(())
    }
}
