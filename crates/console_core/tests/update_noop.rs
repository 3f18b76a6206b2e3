use console_core::{update, FormState, Msg};

#[test]
fn copy_and_open_are_noops_without_url() {
    let state = FormState::new();

    let (next, effects) = update(state.clone(), Msg::CopyClicked);
    assert_eq!(state, next);
    assert!(effects.is_empty());

    let (next, effects) = update(state.clone(), Msg::OpenClicked);
    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn collapsing_advanced_options_emits_nothing() {
    let (state, effects) = update(FormState::new(), Msg::AdvancedToggled);
    assert_eq!(effects.len(), 1);

    let (next, effects) = update(state.clone(), Msg::AdvancedToggled);
    assert!(effects.is_empty());
    assert!(!next.view().form.show_advanced);
    assert_eq!(next.config(), state.config());
}
