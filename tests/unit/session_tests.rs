/*!
 * Tests for the workflow session state machine
 */

use std::path::PathBuf;

use acto::errors::RecipientError;
use acto::session::{DispatchPhase, Phase, Session};

/// Test that a fresh session starts idle with nothing selected
#[test]
fn test_new_shouldStartIdle() {
    let session = Session::new();
    assert!(matches!(session.phase, Phase::Idle));
    assert!(matches!(session.dispatch_phase, DispatchPhase::Idle));
    assert!(session.selected_file().is_none());
    assert!(session.recipients.is_empty());
}

/// Test that selecting a file moves the session to FileSelected
#[test]
fn test_select_file_shouldEnterFileSelected() {
    let mut session = Session::new();
    session.select_file(PathBuf::from("/tmp/meeting.txt"));

    assert!(matches!(session.phase, Phase::FileSelected));
    assert_eq!(session.file_name(), "meeting.txt");
    assert_eq!(
        session.selected_file(),
        Some(PathBuf::from("/tmp/meeting.txt").as_path())
    );
}

/// Test that a fresh file selection discards the previous cycle entirely
#[test]
fn test_select_file_afterCompletedCycle_shouldResetEverything() {
    let mut session = Session::new();
    session.select_file(PathBuf::from("/tmp/first.txt"));
    session.begin_submission();
    session.complete_submission("# Old summary".to_string());
    session.add_recipient("a@b.com").unwrap();
    session.begin_dispatch();
    session.complete_dispatch("Successfully sent to 1/1 recipients".to_string());

    session.select_file(PathBuf::from("/tmp/second.txt"));

    assert!(matches!(session.phase, Phase::FileSelected));
    assert!(matches!(session.dispatch_phase, DispatchPhase::Idle));
    assert!(session.recipients.is_empty());
    assert!(session.phase.summary().is_none());
    assert_eq!(session.file_name(), "second.txt");
}

/// Test the happy-path submission transitions
#[test]
fn test_submission_withSuccess_shouldEndSummarized() {
    let mut session = Session::new();
    session.select_file(PathBuf::from("/tmp/meeting.txt"));

    session.begin_submission();
    assert!(session.phase.is_submitting());

    session.complete_submission("# Summary".to_string());
    assert!(matches!(session.phase, Phase::Summarized { .. }));
    assert_eq!(session.phase.summary(), Some("# Summary"));
    assert!(session.phase.error().is_none());
}

/// Test that a failed submission records the error and no summary
#[test]
fn test_submission_withFailure_shouldEndSummarizeFailed() {
    let mut session = Session::new();
    session.select_file(PathBuf::from("/tmp/meeting.txt"));

    session.begin_submission();
    session.fail_submission("Something went wrong".to_string());

    assert!(matches!(session.phase, Phase::SummarizeFailed { .. }));
    assert_eq!(session.phase.error(), Some("Something went wrong"));
    assert!(session.phase.summary().is_none());
}

/// Test that starting a new submission clears the previous outcome
#[test]
fn test_begin_submission_afterFailure_shouldClearError() {
    let mut session = Session::new();
    session.select_file(PathBuf::from("/tmp/meeting.txt"));
    session.begin_submission();
    session.fail_submission("Something went wrong".to_string());

    session.begin_submission();
    assert!(session.phase.is_submitting());
    assert!(session.phase.error().is_none());
}

/// Test the dispatch state transitions on success
#[test]
fn test_dispatch_withSuccess_shouldEndSent() {
    let mut session = Session::new();
    session.begin_dispatch();
    assert!(session.dispatch_phase.is_sending());

    session.complete_dispatch("Successfully sent to 2/2 recipients".to_string());
    assert!(matches!(session.dispatch_phase, DispatchPhase::Sent { .. }));
    assert_eq!(
        session.dispatch_phase.status_message(),
        Some("Successfully sent to 2/2 recipients")
    );
}

/// Test the dispatch state transitions on failure
#[test]
fn test_dispatch_withFailure_shouldEndSendFailed() {
    let mut session = Session::new();
    session.begin_dispatch();
    session.fail_dispatch("Failed to connect to server".to_string());

    assert!(matches!(session.dispatch_phase, DispatchPhase::SendFailed { .. }));
}

/// Test that a rejected recipient is recorded as the pending error
#[test]
fn test_add_recipient_withInvalidAddress_shouldRecordPendingError() {
    let mut session = Session::new();
    let result = session.add_recipient("not-an-email");

    assert!(result.is_err());
    assert!(matches!(
        session.pending_recipient_error(),
        Some(RecipientError::InvalidFormat)
    ));
}

/// Test that a successful add clears the pending recipient error
#[test]
fn test_add_recipient_afterRejection_shouldClearPendingError() {
    let mut session = Session::new();
    let _ = session.add_recipient("not-an-email");
    session.add_recipient("a@b.com").unwrap();

    assert!(session.pending_recipient_error().is_none());
    assert_eq!(session.recipients.len(), 1);
}

/// Test the phase names used in log lines
#[test]
fn test_phase_name_shouldDescribeEachPhase() {
    assert_eq!(Phase::Idle.name(), "Idle");
    assert_eq!(Phase::Submitting.name(), "Submitting");
    assert_eq!(
        Phase::Summarized {
            summary: String::new()
        }
        .name(),
        "Summarized"
    );
}
