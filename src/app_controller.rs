use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::adapters::{BackendClient, Dispatcher, Summarizer};
use crate::app_config::Config;
use crate::errors::{AppError, RecipientError, SessionError};
use crate::export::{self, ExportFormat};
use crate::file_utils::{FileManager, FileType};
use crate::session::Session;

// @module: Workflow controller for transcript summarization and distribution

/// Main application controller for the submission-and-distribution workflow.
///
/// Owns the single mutable Session and sequences calls to the remote
/// service adapters. Every remote failure is converted into session state
/// at this boundary; only guard violations surface as errors.
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Workflow state
    session: Session,
    // @field: Summarization backend
    summarizer: Box<dyn Summarizer>,
    // @field: Email dispatch backend
    dispatcher: Box<dyn Dispatcher>,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self, AppError> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        let client = BackendClient::new(&config.backend, config.dispatch.payload.clone());
        Ok(Self {
            session: Session::new(),
            summarizer: Box::new(client.clone()),
            dispatcher: Box::new(client),
            config,
        })
    }

    /// Create a controller with explicit adapters, bypassing the HTTP client
    pub fn with_backends(
        config: Config,
        summarizer: Box<dyn Summarizer>,
        dispatcher: Box<dyn Dispatcher>,
    ) -> Self {
        Self {
            session: Session::new(),
            summarizer,
            dispatcher,
            config,
        }
    }

    /// Read-only view of the workflow state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Select the transcript file, starting a fresh workflow cycle.
    ///
    /// Anything that is not plain text is rejected with a blocking error
    /// before any state changes.
    pub fn select_file(&mut self, path: &Path) -> Result<(), AppError> {
        if !FileManager::file_exists(path) {
            return Err(AppError::File(format!("File does not exist: {:?}", path)));
        }

        match FileManager::detect_file_type(path).map_err(AppError::from)? {
            FileType::PlainText => {
                self.session.select_file(path.to_path_buf());
                info!("Selected transcript: {}", self.session.file_name());
                Ok(())
            },
            FileType::Other => Err(SessionError::InvalidFileType.into()),
        }
    }

    /// Submit the selected transcript for summarization.
    ///
    /// Guarded: a missing file or an outstanding request is a blocking
    /// error. The transcript is read fully into memory before the request
    /// is issued. The remote outcome lands in the session phase, never in
    /// the returned result.
    pub async fn submit(&mut self) -> Result<(), AppError> {
        // Unreachable while callers go through `&mut self`; holds the
        // one-request-in-flight rule if the session ever becomes shared
        if self.session.phase.is_submitting() {
            return Err(SessionError::RequestInFlight.into());
        }
        let Some(path) = self.session.selected_file().map(Path::to_path_buf) else {
            return Err(SessionError::NoFileSelected.into());
        };

        self.session.begin_submission();

        let content = match FileManager::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read transcript: {}", e);
                self.session
                    .fail_submission(format!("Failed to read {}", self.session.file_name()));
                return Ok(());
            },
        };

        match self.summarizer.summarize(&content).await {
            Ok(summary) => {
                info!("Summarization complete ({} chars)", summary.len());
                self.session.complete_submission(summary);
            },
            Err(e) => {
                warn!("Summarization failed: {}", e);
                self.session.fail_submission(e.user_message());
            },
        }

        Ok(())
    }

    /// Validate and append a recipient address
    pub fn add_recipient(&mut self, candidate: &str) -> Result<bool, RecipientError> {
        self.session.add_recipient(candidate)
    }

    /// Remove a recipient by exact match
    pub fn remove_recipient(&mut self, target: &str) {
        self.session.remove_recipient(target);
    }

    /// Drop all recipients
    pub fn clear_recipients(&mut self) {
        self.session.clear_recipients();
    }

    /// Export the summary as a document artifact into `output_dir`.
    ///
    /// Only available once summarized; the phase never changes, and an
    /// export failure leaves the session fully intact.
    pub fn export(&self, output_dir: &Path, format: ExportFormat) -> Result<PathBuf, AppError> {
        let Some(summary) = self.session.phase.summary() else {
            return Err(SessionError::NoSummary.into());
        };

        let artifact = export::render_document(summary, format, &self.config.export)?;
        let filename = export::artifact_filename(self.session.file_name(), format);
        let output_path = output_dir.join(filename);
        FileManager::write_bytes(&output_path, &artifact).map_err(AppError::from)?;

        info!("Success: {}", output_path.display());
        Ok(output_path)
    }

    /// Dispatch the summary to the recipient list by email.
    ///
    /// Guarded: requires a summary and a non-empty recipient list; with an
    /// empty list no request is issued and the dispatch phase is
    /// untouched. The remote outcome lands in the dispatch phase.
    pub async fn dispatch(&mut self) -> Result<(), AppError> {
        // Unreachable while callers go through `&mut self`, same as the
        // submit guard
        if self.session.dispatch_phase.is_sending() {
            return Err(SessionError::DispatchInFlight.into());
        }
        let Some(summary) = self.session.phase.summary() else {
            return Err(SessionError::NoSummary.into());
        };
        if self.session.recipients.is_empty() {
            return Err(SessionError::NoRecipients.into());
        }

        let body = summary.to_string();
        let recipients = self.session.recipients.as_slice().to_vec();
        let subject = self.config.dispatch.subject.clone();

        self.session.begin_dispatch();

        match self
            .dispatcher
            .dispatch(&recipients, &subject, &body)
            .await
        {
            Ok(status) => {
                info!("Dispatch complete: {}", status);
                self.session.complete_dispatch(status);
            },
            Err(e) => {
                warn!("Dispatch failed: {}", e);
                self.session.fail_dispatch(e.user_message());
            },
        }

        Ok(())
    }
}
