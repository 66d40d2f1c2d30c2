/*!
 * Error types for the acto application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to the remote backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

impl AdapterError {
    /// Message suitable for surfacing in session state.
    ///
    /// A server-reported message is kept as-is; transport problems collapse
    /// to a generic connectivity message so the user can tell them apart.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } if !message.is_empty() => message.clone(),
            Self::Api { .. } | Self::ParseError(_) => "Something went wrong".to_string(),
            Self::ConnectionError(_) => "Failed to connect to server".to_string(),
        }
    }
}

/// Local validation errors on the recipient list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipientError {
    /// The candidate does not look like an email address
    #[error("Please enter a valid email address")]
    InvalidFormat,

    /// The candidate is already in the list
    #[error("This email has already been added")]
    Duplicate,

    /// The list already holds the maximum number of addresses
    #[error("Maximum 10 emails allowed")]
    CapacityExceeded,
}

/// Errors that can occur while producing a document artifact
#[derive(Error, Debug)]
pub enum ExportError {
    /// Error assembling the document itself
    #[error("Failed to assemble document: {0}")]
    Document(String),

    /// Error writing the artifact to disk
    #[error("Failed to write artifact: {0}")]
    Io(#[from] std::io::Error),
}

/// Guard violations on the submission session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The chosen file is not plain text
    #[error("Please upload a valid .txt file")]
    InvalidFileType,

    /// Submit was requested without a selected file
    #[error("No file selected")]
    NoFileSelected,

    /// A summarization request is already outstanding
    #[error("A summarization request is already in flight")]
    RequestInFlight,

    /// Export or dispatch was requested before a summary exists
    #[error("No summary available yet")]
    NoSummary,

    /// Dispatch was requested with an empty recipient list
    #[error("No recipients to send to")]
    NoRecipients,

    /// A dispatch request is already outstanding
    #[error("A dispatch request is already in flight")]
    DispatchInFlight,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a remote service adapter
    #[error("Adapter error: {0}")]
    Adapter(#[from] AdapterError),

    /// Error from recipient list validation
    #[error("Recipient error: {0}")]
    Recipient(#[from] RecipientError),

    /// Error from the document export pipeline
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Session guard violation
    #[error("{0}")]
    Session(#[from] SessionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
