//! Google Chat webhook client: URL validation, send, connection test.

use std::env;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;

use crate::error::{GoogleChatError, Result};
use crate::payload::{self, ScanStats};
use crate::provider::{Provider, PROWLER_AVATAR_URL};

pub const DEFAULT_CARD_HEADER: &str = "Prowler Scan Summary";
pub const DEFAULT_SUBTITLE: &str = "https://prowler.com";
pub const WEBHOOK_URL_PREFIX: &str = "https://chat.googleapis.com/";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Subtitle env overrides, consulted in this order.
const AUTH_URL_ENV: &str = "AUTH_URL";
const PROWLER_URL_ENV: &str = "PROWLER_URL";

/// Body of a 2xx webhook response.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookResponse {
    /// Body parsed as JSON.
    Json(Value),
    /// Non-empty body that is not valid JSON.
    Text(String),
    /// Empty body; still a valid success.
    Empty,
}

/// Outcome of [`GoogleChat::test_connection`] in non-raising mode.
#[derive(Debug, Default)]
pub struct Connection {
    pub is_connected: bool,
    pub error: Option<GoogleChatError>,
}

impl Connection {
    pub fn connected() -> Self {
        Self {
            is_connected: true,
            error: None,
        }
    }

    pub fn failed(error: GoogleChatError) -> Self {
        Self {
            is_connected: false,
            error: Some(error),
        }
    }
}

/// Return the URL unchanged when it looks like a Google Chat webhook.
///
/// Only the prefix is checked; path and query segments are accepted as-is.
pub fn validate_webhook_url(webhook_url: &str) -> Result<String> {
    if webhook_url.is_empty() {
        return Err(GoogleChatError::invalid_webhook(
            "Google Chat webhook URL is required.",
        ));
    }
    if !webhook_url.starts_with(WEBHOOK_URL_PREFIX) {
        return Err(GoogleChatError::invalid_webhook(format!(
            "Google Chat webhook URL must start with {WEBHOOK_URL_PREFIX}."
        )));
    }
    Ok(webhook_url.to_string())
}

fn resolve_subtitle(auth_url: Option<String>, prowler_url: Option<String>) -> String {
    auth_url
        .filter(|v| !v.is_empty())
        .or(prowler_url.filter(|v| !v.is_empty()))
        .unwrap_or_else(|| DEFAULT_SUBTITLE.to_string())
}

fn build_http_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| {
            GoogleChatError::client("Failed to build Google Chat HTTP client", Some(e.into()))
        })
}

/// Google Chat integration that sends scan summaries as Cards v2 messages.
#[derive(Debug)]
pub struct GoogleChat {
    webhook_url: String,
    provider: Provider,
    card_header: String,
    subtitle: String,
    client: Client,
}

impl GoogleChat {
    /// Build a notifier for a validated webhook URL.
    ///
    /// The card subtitle is resolved once here: `AUTH_URL`, then
    /// `PROWLER_URL`, then the fixed fallback.
    pub fn new(webhook_url: &str, provider: Provider) -> Result<Self> {
        let webhook_url = validate_webhook_url(webhook_url)?;
        Ok(Self {
            webhook_url,
            provider,
            card_header: DEFAULT_CARD_HEADER.to_string(),
            subtitle: resolve_subtitle(
                env::var(AUTH_URL_ENV).ok(),
                env::var(PROWLER_URL_ENV).ok(),
            ),
            client: build_http_client()?,
        })
    }

    /// Override the card subtitle with an explicit space name.
    pub fn with_space_name(mut self, space_name: impl Into<String>) -> Self {
        self.subtitle = space_name.into();
        self
    }

    /// Override the card header title.
    pub fn with_card_header(mut self, card_header: impl Into<String>) -> Self {
        self.card_header = card_header.into();
        self
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// Send audit statistics to Google Chat. One POST, no retries.
    pub async fn send(&self, stats: &ScanStats, args: &str) -> Result<WebhookResponse> {
        let (identity, logo) = self.provider.describe();
        let message = payload::build_message(
            &self.card_header,
            &self.subtitle,
            PROWLER_AVATAR_URL,
            &identity,
            logo,
            stats,
            args,
        );
        let body = serde_json::to_vec(&message).map_err(|e| {
            tracing::error!(target: "google_chat", error = %e, "payload serialization failed");
            GoogleChatError::client(
                "Unexpected error building Google Chat message",
                Some(e.into()),
            )
        })?;

        let response = self
            .client
            .post(&self.webhook_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(target: "google_chat", error = %e, "webhook request failed");
                GoogleChatError::client("Failed to call Google Chat webhook", Some(e.into()))
            })?;

        classify_send_response(response).await
    }

    /// Validate the webhook URL by posting a lightweight test card.
    ///
    /// With `raise_on_exception` every failure surfaces as `Err`; without it
    /// the same typed error is returned inside a not-connected [`Connection`].
    pub async fn test_connection(webhook_url: &str, raise_on_exception: bool) -> Result<Connection> {
        match Self::check_connection(webhook_url).await {
            Ok(connection) => Ok(connection),
            Err(error) if raise_on_exception => Err(error),
            Err(error) => Ok(Connection::failed(error)),
        }
    }

    async fn check_connection(webhook_url: &str) -> Result<Connection> {
        let validated_url = validate_webhook_url(webhook_url)?;
        Self::post_test_card(&validated_url).await
    }

    async fn post_test_card(url: &str) -> Result<Connection> {
        let message = payload::build_test_message(PROWLER_AVATAR_URL);
        let response = build_http_client()?
            .post(url)
            .json(&message)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(target: "google_chat", error = %e, "connection test request failed");
                GoogleChatError::client("Failed to reach Google Chat webhook", Some(e.into()))
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(Connection::connected());
        }
        let body = response.text().await.map_err(|e| {
            GoogleChatError::client("Failed to reach Google Chat webhook", Some(e.into()))
        })?;
        Err(GoogleChatError::send_message(format!(
            "Google Chat webhook returned {}: {}",
            status.as_u16(),
            body
        )))
    }
}

async fn classify_send_response(response: reqwest::Response) -> Result<WebhookResponse> {
    let status = response.status();
    let body = response.text().await.map_err(|e| {
        GoogleChatError::client("Failed to call Google Chat webhook", Some(e.into()))
    })?;

    if status.is_success() {
        if body.is_empty() {
            return Ok(WebhookResponse::Empty);
        }
        return Ok(match serde_json::from_str::<Value>(&body) {
            Ok(value) => WebhookResponse::Json(value),
            Err(_) => WebhookResponse::Text(body),
        });
    }

    Err(GoogleChatError::send_message(format!(
        "Google Chat webhook returned {}: {}",
        status.as_u16(),
        body
    )))
}
