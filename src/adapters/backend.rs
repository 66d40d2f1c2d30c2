use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{Dispatcher, Summarizer};
use crate::app_config::{BackendConfig, DispatchPayloadKind};
use crate::errors::AdapterError;

/// HTTP client for the summarization and email backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    /// HTTP client for API requests
    client: Client,
    /// Base URL of the backend, without trailing slash
    base_url: String,
    /// Preferred send-email request body shape
    payload: DispatchPayloadKind,
}

/// Summarization request body
#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    /// Full transcript text
    content: &'a str,
}

/// Summarization success response
#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    /// Markdown summary text
    summary: String,
}

/// Error payload returned by the backend on non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: String,
}

/// Send-email request body, in one of the two supported shapes
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum DispatchRequest<'a> {
    /// Legacy single-address shape
    Single {
        #[serde(rename = "toEmail")]
        to_email: &'a str,
        subject: &'a str,
        body: &'a str,
    },
    /// Canonical list shape
    Multi {
        emails: &'a [String],
        subject: &'a str,
        body: &'a str,
    },
}

/// Per-recipient outcome reported by the dispatch backend
#[derive(Debug, Deserialize)]
pub struct DispatchResult {
    /// Destination address
    pub email: String,
    /// Delivery status text
    pub status: String,
    /// Whether delivery succeeded for this address
    pub success: bool,
}

/// Send-email success response
#[derive(Debug, Deserialize, Default)]
pub struct DispatchOutcome {
    /// Per-recipient results, when the backend reports them
    #[serde(default)]
    pub results: Vec<DispatchResult>,
    /// Aggregate outcome message
    #[serde(default)]
    pub message: String,
}

impl BackendClient {
    /// Create a new backend client from configuration
    pub fn new(config: &BackendConfig, payload: DispatchPayloadKind) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            payload,
        }
    }

    /// Pick the send-email body shape for the recipient list.
    ///
    /// The single shape carries exactly one address. With more recipients
    /// only the list shape keeps them all, whatever the configured
    /// preference says.
    fn dispatch_request<'a>(
        &self,
        recipients: &'a [String],
        subject: &'a str,
        body: &'a str,
    ) -> DispatchRequest<'a> {
        match (&self.payload, recipients) {
            (DispatchPayloadKind::Single, [single]) => DispatchRequest::Single {
                to_email: single,
                subject,
                body,
            },
            _ => DispatchRequest::Multi {
                emails: recipients,
                subject,
                body,
            },
        }
    }

    /// Convert a non-2xx response into a structured error
    async fn failure_from_response(response: reqwest::Response) -> AdapterError {
        let status_code = response.status().as_u16();
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_default();
        error!("Backend error ({}): {}", status_code, message);
        AdapterError::Api { status_code, message }
    }
}

#[async_trait]
impl Summarizer for BackendClient {
    async fn summarize(&self, content: &str) -> Result<String, AdapterError> {
        let url = format!("{}/api/parse-transcript", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&SummarizeRequest { content })
            .send()
            .await
            .map_err(|e| AdapterError::ConnectionError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::failure_from_response(response).await);
        }

        let body = response
            .json::<SummarizeResponse>()
            .await
            .map_err(|e| AdapterError::ParseError(e.to_string()))?;

        Ok(body.summary)
    }
}

#[async_trait]
impl Dispatcher for BackendClient {
    async fn dispatch(
        &self,
        recipients: &[String],
        subject: &str,
        body: &str,
    ) -> Result<String, AdapterError> {
        let url = format!("{}/api/send-email", self.base_url);

        let request = self.dispatch_request(recipients, subject, body);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AdapterError::ConnectionError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::failure_from_response(response).await);
        }

        // The Go backend answers with per-recipient results and an aggregate
        // message; older deployments answer with an empty object.
        let outcome = response
            .json::<DispatchOutcome>()
            .await
            .unwrap_or_default();

        if outcome.message.is_empty() {
            Ok(format!("Sent to {} recipient(s)", recipients.len()))
        } else {
            Ok(outcome.message)
        }
    }
}
