//! Board Configuration

use std::time::Duration;

use crate::notifier::MESSAGE_TTL;

/// Runtime settings for the board
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Prefix for API paths; empty means same origin
    pub api_base: String,
    /// How long a notifier message stays visible
    pub message_ttl: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            message_ttl: MESSAGE_TTL,
        }
    }
}

impl BoardConfig {
    /// Read overrides from `data-api-base` / `data-message-ttl-ms` on `<body>`
    pub fn from_document() -> Self {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        let Some(body) = body else {
            return Self::default();
        };
        Self::from_attributes(
            body.get_attribute("data-api-base"),
            body.get_attribute("data-message-ttl-ms"),
        )
    }

    fn from_attributes(api_base: Option<String>, ttl_ms: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base {
            config.api_base = base;
        }
        match ttl_ms.map(|raw| raw.trim().parse::<u64>()) {
            Some(Ok(ms)) => config.message_ttl = Duration::from_millis(ms),
            Some(Err(err)) => log::warn!("[CONFIG] Ignoring data-message-ttl-ms: {}", err),
            None => {}
        }
        config
    }
}
