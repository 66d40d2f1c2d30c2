/*!
 * Mock backend implementations for testing
 *
 * This module provides mock implementations of the Summarizer and
 * Dispatcher traits to avoid external HTTP calls in tests. Each mock
 * returns predetermined responses and records the requests it receives.
 */

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use acto::adapters::{Dispatcher, Summarizer};
use acto::errors::AdapterError;

/// Tracks backend calls to ensure no actual external requests are made
#[derive(Debug, Default)]
pub struct ApiCallTracker {
    /// Count of mock backend calls made
    pub call_count: usize,
    /// Last transcript content submitted for summarization
    pub last_content: Option<String>,
    /// Last recipient list handed to the dispatcher
    pub last_recipients: Option<Vec<String>>,
    /// Last subject line handed to the dispatcher
    pub last_subject: Option<String>,
    /// Should the next call fail
    pub should_fail: bool,
    /// Error to return if failing
    pub failure: MockFailure,
}

/// Type of error to simulate
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Transport-level failure before any response arrived
    Connection,
    /// Backend responded with an error payload
    Api { status_code: u16, message: String },
}

impl Default for MockFailure {
    fn default() -> Self {
        MockFailure::Connection
    }
}

impl MockFailure {
    fn to_error(&self) -> AdapterError {
        match self {
            MockFailure::Connection => {
                AdapterError::ConnectionError("Connection failed".to_string())
            },
            MockFailure::Api {
                status_code,
                message,
            } => AdapterError::Api {
                status_code: *status_code,
                message: message.clone(),
            },
        }
    }
}

/// Mock implementation of the summarization backend
#[derive(Debug)]
pub struct MockSummarizer {
    tracker: Arc<Mutex<ApiCallTracker>>,
    summary: String,
}

impl MockSummarizer {
    /// Create a new mock summarizer returning a canned markdown summary
    pub fn new() -> Self {
        Self::with_summary("# Summary\n\n- Mock key point")
    }

    /// Create a mock summarizer returning the given summary text
    pub fn with_summary(summary: &str) -> Self {
        MockSummarizer {
            tracker: Arc::new(Mutex::new(ApiCallTracker::default())),
            summary: summary.to_string(),
        }
    }

    /// Get the backend call tracker
    pub fn tracker(&self) -> Arc<Mutex<ApiCallTracker>> {
        self.tracker.clone()
    }

    /// Configure the mock to fail on the next call
    pub fn fail_next_call(&self, failure: MockFailure) {
        let mut tracker = self.tracker.lock().unwrap();
        tracker.should_fail = true;
        tracker.failure = failure;
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, content: &str) -> Result<String, AdapterError> {
        let mut tracker = self.tracker.lock().unwrap();
        tracker.call_count += 1;
        tracker.last_content = Some(content.to_string());

        if tracker.should_fail {
            tracker.should_fail = false; // Reset for next call
            return Err(tracker.failure.to_error());
        }

        Ok(self.summary.clone())
    }
}

/// Mock implementation of the email dispatch backend
#[derive(Debug)]
pub struct MockDispatcher {
    tracker: Arc<Mutex<ApiCallTracker>>,
}

impl MockDispatcher {
    /// Create a new mock dispatcher
    pub fn new() -> Self {
        MockDispatcher {
            tracker: Arc::new(Mutex::new(ApiCallTracker::default())),
        }
    }

    /// Get the backend call tracker
    pub fn tracker(&self) -> Arc<Mutex<ApiCallTracker>> {
        self.tracker.clone()
    }

    /// Configure the mock to fail on the next call
    pub fn fail_next_call(&self, failure: MockFailure) {
        let mut tracker = self.tracker.lock().unwrap();
        tracker.should_fail = true;
        tracker.failure = failure;
    }
}

#[async_trait]
impl Dispatcher for MockDispatcher {
    async fn dispatch(
        &self,
        recipients: &[String],
        subject: &str,
        _body: &str,
    ) -> Result<String, AdapterError> {
        let mut tracker = self.tracker.lock().unwrap();
        tracker.call_count += 1;
        tracker.last_recipients = Some(recipients.to_vec());
        tracker.last_subject = Some(subject.to_string());

        if tracker.should_fail {
            tracker.should_fail = false; // Reset for next call
            return Err(tracker.failure.to_error());
        }

        Ok(format!(
            "Successfully sent to {}/{} recipients",
            recipients.len(),
            recipients.len()
        ))
    }
}
