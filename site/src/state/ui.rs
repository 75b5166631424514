//! Page chrome state (mobile menu, splash loading, scrolled header).
//!
//! DESIGN
//! ======
//! Provided once by `App` as `RwSignal<UiState>`. The navbar is the only
//! writer of `menu_open` and `scrolled`; the page shell is the only writer of
//! `loading`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Scroll offset past which the navbar switches to its solid style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
    pub loading: bool,
    pub scrolled: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { menu_open: false, loading: true, scrolled: false }
    }
}

impl UiState {
    /// Hamburger control pressed.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A menu link was selected.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Splash sequence completed; reveal the page.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Record the window scroll offset. Returns `true` when the flag flipped.
    pub fn observe_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLLED_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}
