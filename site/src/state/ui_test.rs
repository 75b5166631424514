use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_menu_closed() {
    let state = UiState::default();
    assert!(!state.menu_open);
}

#[test]
fn ui_state_default_is_loading() {
    let state = UiState::default();
    assert!(state.loading);
    assert!(!state.scrolled);
}

// =============================================================
// Menu
// =============================================================

#[test]
fn toggle_menu_twice_returns_to_closed() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn close_menu_after_link_selection() {
    let mut state = UiState::default();
    state.toggle_menu();
    state.close_menu();
    assert!(!state.menu_open);
}

#[test]
fn close_menu_when_already_closed_is_noop() {
    let mut state = UiState::default();
    state.close_menu();
    assert_eq!(state, UiState::default());
}

// =============================================================
// Loading + scroll
// =============================================================

#[test]
fn finish_loading_clears_flag() {
    let mut state = UiState::default();
    state.finish_loading();
    assert!(!state.loading);
}

#[test]
fn observe_scroll_flips_past_threshold() {
    let mut state = UiState::default();
    assert!(!state.observe_scroll(SCROLLED_THRESHOLD_PX));
    assert!(!state.scrolled);
    assert!(state.observe_scroll(SCROLLED_THRESHOLD_PX + 1.0));
    assert!(state.scrolled);
    assert!(!state.observe_scroll(400.0));
    assert!(state.observe_scroll(0.0));
    assert!(!state.scrolled);
}
