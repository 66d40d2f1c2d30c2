/*!
 * Session state for one transcript-submission-and-distribution workflow.
 *
 * The summary text lives inside the `Summarized` phase and the failure
 * message inside `SummarizeFailed`, so a summary without the matching phase
 * is unrepresentable. The session records state; guards against invalid
 * operations live in the controller.
 */

use std::path::{Path, PathBuf};

use crate::errors::RecipientError;
use crate::recipients::RecipientList;

/// Discrete stage of the summarization lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// No file chosen yet
    #[default]
    Idle,
    /// A valid plain-text file is selected
    FileSelected,
    /// A summarization request is outstanding
    Submitting,
    /// The backend returned a summary
    Summarized {
        /// Markdown-formatted summary text
        summary: String,
    },
    /// The last submission failed
    SummarizeFailed {
        /// Message shown until the next submission attempt
        error: String,
    },
}

impl Phase {
    /// Summary text, present only in the `Summarized` phase
    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Summarized { summary } => Some(summary),
            _ => None,
        }
    }

    /// Failure message, present only in the `SummarizeFailed` phase
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::SummarizeFailed { error } => Some(error),
            _ => None,
        }
    }

    /// Whether a summarization request is outstanding
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Short phase name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::FileSelected => "FileSelected",
            Self::Submitting => "Submitting",
            Self::Summarized { .. } => "Summarized",
            Self::SummarizeFailed { .. } => "SummarizeFailed",
        }
    }
}

/// Discrete stage of the email dispatch lifecycle, tracked independently
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DispatchPhase {
    /// No dispatch attempted in this cycle
    #[default]
    Idle,
    /// A dispatch request is outstanding
    Sending,
    /// The backend accepted the dispatch
    Sent {
        /// Human-readable outcome reported by the backend
        status: String,
    },
    /// The last dispatch failed
    SendFailed {
        /// Message describing the failure
        error: String,
    },
}

impl DispatchPhase {
    /// Whether a dispatch request is outstanding
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    /// Last human-readable dispatch outcome, success or failure
    pub fn status_message(&self) -> Option<&str> {
        match self {
            Self::Sent { status } => Some(status),
            Self::SendFailed { error } => Some(error),
            _ => None,
        }
    }
}

/// The single mutable aggregate for one workflow instance
#[derive(Debug, Default)]
pub struct Session {
    /// Path of the selected plain-text source, if any
    selected_file: Option<PathBuf>,
    /// Display label derived from the selected file
    file_name: String,
    /// Summarization lifecycle stage
    pub phase: Phase,
    /// Validated, deduplicated destination addresses
    pub recipients: RecipientList,
    /// Validation error attached to the pending recipient input
    pending_recipient_error: Option<RecipientError>,
    /// Email dispatch lifecycle stage
    pub dispatch_phase: DispatchPhase,
}

impl Session {
    /// Create an empty session in the `Idle` phase
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the selected file, if any
    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    /// Display name of the selected file
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Validation error attached to the pending recipient input
    pub fn pending_recipient_error(&self) -> Option<&RecipientError> {
        self.pending_recipient_error.as_ref()
    }

    /// Store a freshly selected file.
    ///
    /// A fresh selection discards the previous cycle entirely: summary,
    /// errors, dispatch state and recipients all reset. A failed send or
    /// export never does this.
    pub fn select_file(&mut self, path: PathBuf) {
        self.file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        self.selected_file = Some(path);
        self.phase = Phase::FileSelected;
        self.recipients.clear();
        self.pending_recipient_error = None;
        self.dispatch_phase = DispatchPhase::Idle;
    }

    /// Enter `Submitting`, clearing any prior summary or failure message
    pub fn begin_submission(&mut self) {
        self.phase = Phase::Submitting;
    }

    /// Record a successful summarization
    pub fn complete_submission(&mut self, summary: String) {
        self.phase = Phase::Summarized { summary };
    }

    /// Record a failed summarization
    pub fn fail_submission(&mut self, error: String) {
        self.phase = Phase::SummarizeFailed { error };
    }

    /// Enter `Sending`
    pub fn begin_dispatch(&mut self) {
        self.dispatch_phase = DispatchPhase::Sending;
    }

    /// Record a successful dispatch
    pub fn complete_dispatch(&mut self, status: String) {
        self.dispatch_phase = DispatchPhase::Sent { status };
    }

    /// Record a failed dispatch; recipients and summary are untouched
    pub fn fail_dispatch(&mut self, error: String) {
        self.dispatch_phase = DispatchPhase::SendFailed { error };
    }

    /// Validate and append a recipient address.
    ///
    /// The prior pending error is cleared on every attempt; a failed
    /// attempt records the new error without mutating the list.
    pub fn add_recipient(&mut self, candidate: &str) -> Result<bool, RecipientError> {
        self.pending_recipient_error = None;
        match self.recipients.add(candidate) {
            Ok(added) => Ok(added),
            Err(error) => {
                self.pending_recipient_error = Some(error.clone());
                Err(error)
            },
        }
    }

    /// Remove a recipient by exact match; absent targets are a no-op
    pub fn remove_recipient(&mut self, target: &str) {
        self.recipients.remove(target);
    }

    /// Drop all recipients and any pending input error
    pub fn clear_recipients(&mut self) {
        self.recipients.clear();
        self.pending_recipient_error = None;
    }
}
