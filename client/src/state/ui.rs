//! Local UI chrome state (theme, sidebar).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session model so the
//! layout chrome can evolve independently of auth data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Sidebar visibility on narrow screens.
    pub sidebar_open: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Close the sidebar after navigating from it.
    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}
