//! HTTP sender for substituted messages.

use anyhow::Context;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

/// Content type sent with every message.
pub const XML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Maximum number of characters of a failed response body written to the debug log.
const RESPONSE_PREVIEW_CHARS: usize = 200;

/// Result of a single send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Endpoint answered `200 OK`.
    Success { status: u16, bytes: u64 },
    /// Endpoint answered with any other status.
    HttpStatus { status: u16, reason: String },
    /// No complete response within the configured timeout.
    Timeout,
    /// Endpoint could not be reached.
    Connection(String),
    /// Any other client error.
    Other(String),
}

impl SendOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SendOutcome::Success { .. })
    }

    /// Classify a client error: timeout first, then connection failure.
    fn from_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SendOutcome::Timeout
        } else if err.is_connect() {
            SendOutcome::Connection(format!("{:#}", anyhow::Error::new(err)))
        } else {
            SendOutcome::Other(format!("{:#}", anyhow::Error::new(err)))
        }
    }
}

/// Issues one POST per message with a fixed timeout.
pub struct HttpSender {
    client: Client,
    endpoint: Url,
    timeout: Duration,
    soap_action: String,
}

impl HttpSender {
    /// Create a sender for `endpoint`.
    ///
    /// `soap_action` is sent quoted in the `SOAPAction` header; an empty
    /// action yields `SOAPAction: ""`.
    pub fn new(endpoint: Url, timeout: Duration, soap_action: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            timeout,
            soap_action: quote_soap_action(soap_action),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// POST `body` and classify the result.
    ///
    /// Never returns an error: every failure is reported as a [`SendOutcome`]
    /// and logged once.
    pub async fn send(&self, template_name: &str, body: String) -> SendOutcome {
        tracing::debug!(
            "Sending [{}] ({} bytes) to {}",
            template_name,
            body.len(),
            self.endpoint
        );

        let result = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, XML_CONTENT_TYPE)
            .header("SOAPAction", &self.soap_action)
            .body(body)
            .send()
            .await;

        let outcome = match result {
            Ok(response) => {
                let status = response.status();
                if status == StatusCode::OK {
                    match response.bytes().await {
                        Ok(bytes) => SendOutcome::Success {
                            status: status.as_u16(),
                            bytes: bytes.len() as u64,
                        },
                        Err(e) => SendOutcome::from_error(e),
                    }
                } else {
                    let reason = status.canonical_reason().unwrap_or("").to_string();
                    match response.text().await {
                        Ok(text) => tracing::debug!("Response: {}...", preview(&text)),
                        Err(e) => tracing::debug!("Failed to read response body: {e}"),
                    }
                    SendOutcome::HttpStatus {
                        status: status.as_u16(),
                        reason,
                    }
                }
            }
            Err(e) => SendOutcome::from_error(e),
        };

        self.log_outcome(template_name, &outcome);
        outcome
    }

    fn log_outcome(&self, template_name: &str, outcome: &SendOutcome) {
        match outcome {
            SendOutcome::Success { status, bytes } => {
                tracing::info!("Success [{template_name}] - HTTP {status} - {bytes} bytes");
            }
            SendOutcome::HttpStatus { status, reason } => {
                tracing::warn!("Failure [{template_name}] - HTTP {status} {reason}");
            }
            SendOutcome::Timeout => {
                tracing::error!(
                    "Timeout [{template_name}] - no response within {:?}",
                    self.timeout
                );
            }
            SendOutcome::Connection(detail) => {
                tracing::error!(
                    "Connection error [{template_name}] - endpoint unreachable: {detail}"
                );
            }
            SendOutcome::Other(detail) => {
                tracing::error!("Unexpected error [{template_name}] - {detail}");
            }
        }
    }
}

fn quote_soap_action(action: &str) -> String {
    let trimmed = action.trim_matches('"');
    format!("\"{trimmed}\"")
}

fn preview(text: &str) -> String {
    text.chars().take(RESPONSE_PREVIEW_CHARS).collect()
}
