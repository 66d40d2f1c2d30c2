/*!
 * Remote service adapters.
 *
 * This module contains the thin request/response contracts to the two
 * external backends consumed by the session controller:
 * - summarization: raw transcript text in, markdown summary out
 * - email dispatch: recipients plus subject/body in, status message out
 *
 * Both adapters are single-attempt from the controller's perspective:
 * no retry, no backoff. One user action, one request.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::AdapterError;

/// Contract for the summarization backend
///
/// Implementations must be usable behind a trait object so the controller
/// logic can be tested without a live backend.
#[async_trait]
pub trait Summarizer: Send + Sync + Debug {
    /// Submit a full transcript and return the markdown summary
    ///
    /// # Arguments
    /// * `content` - The full transcript text, read into memory by the caller
    ///
    /// # Returns
    /// * `Result<String, AdapterError>` - The summary or a structured failure
    async fn summarize(&self, content: &str) -> Result<String, AdapterError>;
}

/// Contract for the email dispatch backend
#[async_trait]
pub trait Dispatcher: Send + Sync + Debug {
    /// Send the summary to one or more recipients
    ///
    /// # Arguments
    /// * `recipients` - Validated destination addresses, never empty
    /// * `subject` - Subject line
    /// * `body` - Markdown summary text
    ///
    /// # Returns
    /// * `Result<String, AdapterError>` - The backend's human-readable
    ///   outcome message, or a structured failure
    async fn dispatch(
        &self,
        recipients: &[String],
        subject: &str,
        body: &str,
    ) -> Result<String, AdapterError>;
}

pub mod backend;

pub use backend::BackendClient;
