use crate::{Effect, FormState, Msg, Revision, COPY_FEEDBACK_DURATION, DEBOUNCE_DELAY};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::FieldEdited(edit) => {
            let revision = state.apply_edit(edit);
            vec![schedule_submit(revision)]
        }
        Msg::AdvancedToggled => {
            // Revealing the advanced fields resets them to the provider defaults.
            if state.toggle_advanced() {
                let revision = state.reset_endpoints();
                vec![schedule_submit(revision)]
            } else {
                Vec::new()
            }
        }
        Msg::DebounceElapsed { revision } => {
            if revision != state.revision() {
                return (state, Vec::new());
            }
            match state.config().validate() {
                Err(err) => {
                    state.set_error(err.to_string());
                    Vec::new()
                }
                Ok(()) => {
                    let submission_id = state.begin_submission();
                    vec![Effect::Submit {
                        submission_id,
                        config: state.config().clone(),
                    }]
                }
            }
        }
        Msg::SubmissionSucceeded { submission_id, url } => {
            state.finish_success(submission_id, url);
            Vec::new()
        }
        Msg::SubmissionFailed {
            submission_id,
            message,
        } => {
            state.finish_failure(submission_id, message);
            Vec::new()
        }
        Msg::CopyClicked => match state.generated_url() {
            Some(url) => vec![Effect::CopyToClipboard {
                url: url.to_string(),
            }],
            None => Vec::new(),
        },
        Msg::CopyFinished { ok } => {
            if ok {
                state.set_copied(true);
                vec![Effect::ScheduleCopyReset {
                    delay: COPY_FEEDBACK_DURATION,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::CopyResetElapsed => {
            state.set_copied(false);
            Vec::new()
        }
        Msg::OpenClicked => match state.generated_url() {
            Some(url) => vec![Effect::OpenInBrowser {
                url: url.to_string(),
            }],
            None => Vec::new(),
        },
    };

    (state, effects)
}

fn schedule_submit(revision: Revision) -> Effect {
    Effect::ScheduleSubmit {
        revision,
        delay: DEBOUNCE_DELAY,
    }
}
