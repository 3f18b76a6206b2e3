#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User changed one form field.
    FieldEdited(crate::FieldEdit),
    /// User expanded or collapsed the advanced options.
    AdvancedToggled,
    /// The submit timer armed for `revision` elapsed.
    DebounceElapsed { revision: crate::Revision },
    /// Engine returned a login URL.
    SubmissionSucceeded {
        submission_id: crate::SubmissionId,
        url: String,
    },
    /// Engine failed; `message` is the server-provided text, if any.
    SubmissionFailed {
        submission_id: crate::SubmissionId,
        message: Option<String>,
    },
    /// User clicked Copy.
    CopyClicked,
    /// Clipboard write finished.
    CopyFinished { ok: bool },
    /// The copy confirmation period elapsed.
    CopyResetElapsed,
    /// User clicked Open.
    OpenClicked,
}
