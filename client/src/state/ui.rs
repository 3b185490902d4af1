#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Page chrome state: theme, mobile navigation, and hero reveal.
///
/// Provided as an `RwSignal<UiState>` context from the root component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
    pub hero_revealed: bool,
}

impl UiState {
    /// Flip the mobile menu and return whether it is now open.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}

/// `aria-pressed` / `aria-expanded` attribute value for a flag.
#[must_use]
pub fn aria_bool(flag: bool) -> &'static str {
    if flag { "true" } else { "false" }
}
