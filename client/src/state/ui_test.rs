use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_light_with_menu_closed() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.mobile_menu_open);
    assert!(!state.hero_revealed);
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn toggle_mobile_menu_opens_then_closes() {
    let mut state = UiState::default();
    assert!(state.toggle_mobile_menu());
    assert!(state.mobile_menu_open);
    assert!(!state.toggle_mobile_menu());
    assert!(!state.mobile_menu_open);
}

#[test]
fn close_mobile_menu_is_idempotent() {
    let mut state = UiState { mobile_menu_open: true, ..UiState::default() };
    state.close_mobile_menu();
    state.close_mobile_menu();
    assert!(!state.mobile_menu_open);
}

#[test]
fn aria_bool_renders_attribute_strings() {
    assert_eq!(aria_bool(true), "true");
    assert_eq!(aria_bool(false), "false");
}
