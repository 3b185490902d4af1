//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::ui::{UiState, aria_bool};
use crate::util::dark_mode;

/// Button that flips the theme, persists the choice, and reports its state
/// through `aria-pressed`. The header renders one for desktop and one inside
/// the mobile bar; both read the same `UiState`.
#[component]
pub fn ThemeToggle(control_id: &'static str) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <button
            id=control_id
            type="button"
            class="theme-toggle p-2 rounded-lg text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800"
            aria-label="Toggle dark mode"
            aria-pressed=move || aria_bool(ui.get().dark_mode)
            on:click=on_toggle
            title="Toggle dark mode"
        >
            {move || if ui.get().dark_mode { "☀" } else { "☾" }}
        </button>
    }
}
