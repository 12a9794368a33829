//! Google Chat integration for Prowler scan summaries.
//!
//! Validates a webhook URL, renders a Cards v2 payload from aggregate scan
//! statistics, POSTs it, and maps failures onto a small typed error taxonomy.

pub mod client;
pub mod error;
pub mod payload;
pub mod provider;

pub use client::{
    validate_webhook_url, Connection, GoogleChat, WebhookResponse, DEFAULT_CARD_HEADER,
    DEFAULT_SUBTITLE, REQUEST_TIMEOUT, WEBHOOK_URL_PREFIX,
};
pub use error::{GoogleChatError, GoogleChatErrorKind, Result};
pub use payload::ScanStats;
pub use provider::Provider;
