use std::sync::Once;

use console_core::{
    update, CloudConfig, Effect, FieldEdit, FormState, Msg, Provider, DEBOUNCE_DELAY,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn edit(state: FormState, edit: FieldEdit) -> (FormState, Vec<Effect>) {
    update(state, Msg::FieldEdited(edit))
}

fn edit_all(state: FormState, edits: Vec<FieldEdit>) -> FormState {
    edits
        .into_iter()
        .fold(state, |state, field| edit(state, field).0)
}

/// Fires the timer for the latest revision, as the shell would after the quiet period.
fn settle(state: FormState) -> (FormState, Vec<Effect>) {
    let revision = state.revision();
    update(state, Msg::DebounceElapsed { revision })
}

fn has_submit(effects: &[Effect]) -> bool {
    effects
        .iter()
        .any(|effect| matches!(effect, Effect::Submit { .. }))
}

#[test]
fn initial_state_uses_tencent_defaults() {
    init_logging();
    let view = FormState::new().view();
    assert_eq!(view.form.provider, Provider::Tencent);
    assert_eq!(view.form.destination, "https://console.cloud.tencent.com");
    assert_eq!(view.form.login_url, "");
    assert!(!view.form.loading);
    assert_eq!(view.form.error, None);
    assert_eq!(view.result.url, None);
}

#[test]
fn every_edit_schedules_the_submit_timer() {
    init_logging();
    let (state, effects) = edit(FormState::new(), FieldEdit::SecretId("AKID1".into()));
    assert_eq!(
        effects,
        vec![Effect::ScheduleSubmit {
            revision: 1,
            delay: DEBOUNCE_DELAY,
        }]
    );

    let (_state, effects) = edit(state, FieldEdit::SecretKey("SK1".into()));
    assert_eq!(
        effects,
        vec![Effect::ScheduleSubmit {
            revision: 2,
            delay: DEBOUNCE_DELAY,
        }]
    );
}

#[test]
fn missing_secret_blocks_submission() {
    init_logging();
    let cases = vec![
        vec![],
        vec![FieldEdit::SecretId("AKID1".into()), FieldEdit::Token("T1".into())],
        vec![FieldEdit::SecretKey("SK1".into()), FieldEdit::RoleArn("arn".into())],
    ];

    for edits in cases {
        // An untouched form never has a timer; force one through a provider edit.
        let state = edit_all(FormState::new(), edits);
        let (state, _) = edit(state, FieldEdit::Provider(Provider::Tencent));
        let (state, effects) = settle(state);

        assert!(!has_submit(&effects));
        let view = state.view();
        assert_eq!(
            view.form.error.as_deref(),
            Some("SecretId and SecretKey are required")
        );
        assert!(!view.form.loading);
    }
}

#[test]
fn missing_token_and_role_arn_blocks_submission() {
    init_logging();
    let state = edit_all(
        FormState::new(),
        vec![
            FieldEdit::SecretId("AKID1".into()),
            FieldEdit::SecretKey("SK1".into()),
        ],
    );
    let (state, effects) = settle(state);

    assert!(!has_submit(&effects));
    assert_eq!(
        state.view().form.error.as_deref(),
        Some("exactly one of Token/RoleArn must be provided")
    );
}

#[test]
fn token_and_role_arn_together_are_accepted() {
    init_logging();
    let state = edit_all(
        FormState::new(),
        vec![
            FieldEdit::SecretId("AKID1".into()),
            FieldEdit::SecretKey("SK1".into()),
            FieldEdit::Token("T1".into()),
            FieldEdit::RoleArn("arn:aws:iam::123:role/ops".into()),
        ],
    );
    let (state, effects) = settle(state);

    assert!(has_submit(&effects));
    assert!(state.view().form.loading);
    assert_eq!(state.view().form.error, None);
}

#[test]
fn provider_change_resets_endpoints() {
    init_logging();
    for provider in Provider::ALL {
        let state = edit_all(
            FormState::new(),
            vec![
                FieldEdit::Destination("https://custom.example".into()),
                FieldEdit::LoginUrl("https://login.example".into()),
                FieldEdit::Provider(provider),
            ],
        );
        let defaults = provider.defaults();
        assert_eq!(state.config().provider, provider);
        assert_eq!(state.config().destination, defaults.destination);
        assert_eq!(state.config().login_url, defaults.login_url);
    }
}

#[test]
fn provider_change_keeps_credentials() {
    init_logging();
    let state = edit_all(
        FormState::new(),
        vec![
            FieldEdit::SecretId("AKID1".into()),
            FieldEdit::Token("T1".into()),
            FieldEdit::Provider(Provider::Alibaba),
        ],
    );
    assert_eq!(state.config().secret_id, "AKID1");
    assert_eq!(state.config().token, "T1");
    assert_eq!(state.config().login_url, "https://account.aliyun.com/login");
}

#[test]
fn revealing_advanced_options_reverts_manual_endpoints() {
    init_logging();
    let state = edit_all(
        FormState::new(),
        vec![
            FieldEdit::Provider(Provider::Aws),
            FieldEdit::LoginUrl("https://manual.example/login".into()),
        ],
    );
    let revision_before = state.revision();

    let (state, effects) = update(state, Msg::AdvancedToggled);

    assert!(state.view().form.show_advanced);
    assert_eq!(state.config().login_url, "https://signin.aws.amazon.com");
    assert_eq!(
        effects,
        vec![Effect::ScheduleSubmit {
            revision: revision_before + 1,
            delay: DEBOUNCE_DELAY,
        }]
    );
}

#[test]
fn submit_carries_snapshot_at_fire_time() {
    init_logging();
    let state = edit_all(
        FormState::new(),
        vec![
            FieldEdit::SecretId("AKID1".into()),
            FieldEdit::SecretKey("SK1".into()),
            FieldEdit::Token("T1".into()),
        ],
    );
    let (_state, effects) = settle(state);

    let expected = CloudConfig {
        secret_id: "AKID1".into(),
        secret_key: "SK1".into(),
        token: "T1".into(),
        ..CloudConfig::default()
    };
    assert_eq!(
        effects,
        vec![Effect::Submit {
            submission_id: 1,
            config: expected,
        }]
    );
}

#[test]
fn validation_failure_keeps_previous_url() {
    init_logging();
    let state = edit_all(
        FormState::new(),
        vec![
            FieldEdit::SecretId("AKID1".into()),
            FieldEdit::SecretKey("SK1".into()),
            FieldEdit::Token("T1".into()),
        ],
    );
    let (state, _) = settle(state);
    let (state, _) = update(
        state,
        Msg::SubmissionSucceeded {
            submission_id: 1,
            url: "https://signin.example/abc".into(),
        },
    );

    let (state, _) = edit(state, FieldEdit::SecretKey(String::new()));
    let (state, effects) = settle(state);

    assert!(!has_submit(&effects));
    let view = state.view();
    assert_eq!(view.result.url.as_deref(), Some("https://signin.example/abc"));
    assert_eq!(
        view.form.error.as_deref(),
        Some("SecretId and SecretKey are required")
    );
}

#[test]
fn view_reports_pending_redraw() {
    init_logging();
    let state = FormState::new();
    assert!(!state.view().dirty);

    let (mut state, _) = edit(state, FieldEdit::SecretId("AKID1".into()));
    assert!(state.view().dirty);
    assert!(state.consume_dirty());
    assert!(!state.view().dirty);
}
