//! Site header: desktop links, theme toggles, and the mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The mobile menu button and panel share `UiState::mobile_menu_open`; the
//! button mirrors it in `aria-expanded` and the panel hides via the `hidden`
//! class. Following any menu link closes the panel.

use leptos::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::ui::{UiState, aria_bool};

/// Section anchors shown in both the desktop and mobile navigation.
pub const NAV_LINKS: &[(&str, &str)] = &[("#about", "About"), ("#skills", "Skills"), ("#contact", "Contact")];

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close_menu = Callback::new(move |()| ui.update(UiState::close_mobile_menu));

    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-white/90 dark:bg-gray-900/90 backdrop-blur">
            <nav class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
                <AnchorLink href="#hero" class="text-xl font-bold text-primary">
                    "Portfolio"
                </AnchorLink>

                <div class="hidden md:flex items-center gap-6">
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| {
                            view! {
                                <AnchorLink
                                    href=href
                                    class="text-gray-700 dark:text-gray-300 hover:text-primary"
                                >
                                    {label}
                                </AnchorLink>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle control_id="theme-toggle"/>
                </div>

                <div class="flex md:hidden items-center gap-2">
                    <ThemeToggle control_id="theme-toggle-mobile"/>
                    <button
                        id="mobile-menu-button"
                        type="button"
                        class="p-2 rounded-lg text-gray-700 dark:text-gray-300"
                        aria-controls="mobile-menu"
                        aria-label="Toggle navigation"
                        aria-expanded=move || aria_bool(ui.get().mobile_menu_open)
                        on:click=move |_| {
                            ui.update(|u| {
                                u.toggle_mobile_menu();
                            });
                        }
                    >
                        "☰"
                    </button>
                </div>
            </nav>

            <div
                id="mobile-menu"
                class="md:hidden px-4 pb-4 flex flex-col gap-2"
                class:hidden=move || !ui.get().mobile_menu_open
            >
                {NAV_LINKS
                    .iter()
                    .map(|&(href, label)| {
                        view! {
                            <AnchorLink
                                href=href
                                class="block py-2 text-gray-700 dark:text-gray-300"
                                on_follow=close_menu
                            >
                                {label}
                            </AnchorLink>
                        }
                    })
                    .collect_view()}
            </div>
        </header>
    }
}
