use super::*;

#[test]
fn ui_state_defaults_light_with_sidebar_closed() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.sidebar_open);
}

#[test]
fn sidebar_toggles_and_closes() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_open);
    state.close_sidebar();
    assert!(!state.sidebar_open);
    state.close_sidebar();
    assert!(!state.sidebar_open);
}
