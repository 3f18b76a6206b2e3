use std::time::Duration;

use crate::{CloudConfig, Revision, SubmissionId};

/// Quiet period after the last configuration change before submitting.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// How long the copy button shows its confirmation state.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// (Re)arm the submit timer; any pending one is cancelled.
    ScheduleSubmit { revision: Revision, delay: Duration },
    /// Send the snapshot to the role login endpoint.
    Submit {
        submission_id: SubmissionId,
        config: CloudConfig,
    },
    CopyToClipboard { url: String },
    ScheduleCopyReset { delay: Duration },
    OpenInBrowser { url: String },
}
