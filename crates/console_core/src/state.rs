use crate::view_model::{AppViewModel, FormViewModel, ResultViewModel};
use crate::{CloudConfig, FieldEdit};

pub type Revision = u64;
pub type SubmissionId = u64;

/// Shown when a submission fails without a server-provided message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate URL";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    config: CloudConfig,
    show_advanced: bool,
    loading: bool,
    error: Option<String>,
    generated_url: Option<String>,
    copied: bool,
    revision: Revision,
    next_submission_id: SubmissionId,
    dirty: bool,
}

fn non_blank(url: String) -> Option<String> {
    Some(url).filter(|text| !text.trim().is_empty())
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn generated_url(&self) -> Option<&str> {
        self.generated_url.as_deref()
    }

    pub fn view(&self) -> AppViewModel {
        let defaults = self.config.provider.defaults();
        let has_url = self.generated_url.is_some();
        AppViewModel {
            form: FormViewModel {
                provider: self.config.provider,
                secret_id: self.config.secret_id.clone(),
                secret_key: self.config.secret_key.clone(),
                token: self.config.token.clone(),
                role_arn: self.config.role_arn.clone(),
                show_advanced: self.show_advanced,
                destination: self.config.destination.clone(),
                login_url: self.config.login_url.clone(),
                destination_placeholder: defaults.destination,
                login_url_placeholder: defaults.login_url,
                loading: self.loading,
                error: self.error.clone(),
            },
            result: ResultViewModel {
                url: self.generated_url.clone(),
                copied: self.copied,
                copy_enabled: has_url,
                open_enabled: has_url,
            },
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Applies an edit and returns the revision the submit timer must carry.
    pub(crate) fn apply_edit(&mut self, edit: FieldEdit) -> Revision {
        let config = std::mem::take(&mut self.config);
        self.config = config.apply(edit);
        self.bump_revision()
    }

    /// Flips advanced-options visibility; returns `true` when it was opened.
    pub(crate) fn toggle_advanced(&mut self) -> bool {
        self.show_advanced = !self.show_advanced;
        self.mark_dirty();
        self.show_advanced
    }

    pub(crate) fn reset_endpoints(&mut self) -> Revision {
        let config = std::mem::take(&mut self.config);
        self.config = config.with_default_endpoints();
        self.bump_revision()
    }

    fn bump_revision(&mut self) -> Revision {
        self.revision += 1;
        self.mark_dirty();
        self.revision
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error = Some(message);
        self.mark_dirty();
    }

    pub(crate) fn begin_submission(&mut self) -> SubmissionId {
        self.next_submission_id += 1;
        self.loading = true;
        self.error = None;
        self.mark_dirty();
        self.next_submission_id
    }

    /// Only the most recent submission ends the loading state; earlier
    /// answers still apply their outcome in arrival order.
    fn settle_loading(&mut self, submission_id: SubmissionId) {
        if submission_id == self.next_submission_id {
            self.loading = false;
        }
    }

    /// A blank URL counts as no URL: the placeholder returns and the actions
    /// stay disabled.
    pub(crate) fn finish_success(&mut self, submission_id: SubmissionId, url: String) {
        self.settle_loading(submission_id);
        self.generated_url = non_blank(url);
        self.mark_dirty();
    }

    pub(crate) fn finish_failure(&mut self, submission_id: SubmissionId, message: Option<String>) {
        self.settle_loading(submission_id);
        let message = message
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
        self.error = Some(message);
        self.mark_dirty();
    }

    pub(crate) fn set_copied(&mut self, copied: bool) {
        if self.copied != copied {
            self.copied = copied;
            self.mark_dirty();
        }
    }
}
