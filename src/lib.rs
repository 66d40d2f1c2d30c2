/*!
 * # Acto - AI Meeting Transcript Summarizer
 *
 * A Rust library for submitting meeting transcripts to a summarization
 * backend and distributing the result as a rendered document or by email.
 *
 * ## Features
 *
 * - Plain-text transcript intake with type validation
 * - Asynchronous summarization through a remote backend
 * - Recipient list management (validation, deduplication, capacity limits)
 * - Branded document export (PDF and HTML) from the markdown summary
 * - Email dispatch to up to 10 recipients per send
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `session`: Workflow state (submission and dispatch phases)
 * - `recipients`: Recipient list validation and bounds
 * - `export`: Markdown-to-document rendering pipeline
 * - `adapters`: Clients for the summarization and email backends
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod adapters;
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod export;
pub mod file_utils;
pub mod recipients;
pub mod session;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AdapterError, AppError, ExportError, RecipientError, SessionError};
pub use export::ExportFormat;
pub use recipients::{validate_address, RecipientList, MAX_RECIPIENTS};
pub use session::{DispatchPhase, Phase, Session};
