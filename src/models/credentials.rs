//! Messaging API secrets read from the environment.

use crate::error::{AppError, Result};

/// Environment variable holding the bot token.
pub const BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable holding the destination chat identifier.
pub const CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Bot token and destination chat, both required to send notifications.
#[derive(Clone)]
pub struct Credentials {
    pub bot_token: String,
    pub chat_id: String,
}

impl Credentials {
    /// Read credentials from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary lookup.
    ///
    /// Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| AppError::MissingEnv(name.to_string()))
        };

        Ok(Self {
            bot_token: required(BOT_TOKEN_VAR)?,
            chat_id: required(CHAT_ID_VAR)?,
        })
    }
}

// The token must never end up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}
