//! Single-page portfolio: hero, about, skills, contact.

use leptos::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::nav_bar::NavBar;
use crate::components::skills_panel::SkillsPanel;
use crate::state::ui::UiState;

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let hidden = move || !ui.get().hero_revealed;

    view! {
        <NavBar/>
        <main class="pt-16 bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100">
            <section id="hero" class="min-h-[80vh] flex flex-col justify-center max-w-6xl mx-auto px-4">
                <p class="transition-opacity duration-700 text-primary font-medium" class:opacity-0=hidden>
                    "Hello, I'm"
                </p>
                <h1 class="transition-opacity duration-700 text-5xl font-bold mt-2" class:opacity-0=hidden>
                    "Automation & Embedded Systems Engineer"
                </h1>
                <p
                    class="transition-opacity duration-700 mt-4 text-lg text-gray-600 dark:text-gray-400"
                    class:opacity-0=hidden
                >
                    "Industrial control, embedded firmware, and the data pipelines that connect them."
                </p>
                <div class="transition-opacity duration-700 mt-8 flex gap-4" class:opacity-0=hidden>
                    <AnchorLink href="#skills" class="px-6 py-3 rounded-lg bg-primary text-white">
                        "View skills"
                    </AnchorLink>
                    <AnchorLink href="#contact" class="px-6 py-3 rounded-lg border border-primary text-primary">
                        "Get in touch"
                    </AnchorLink>
                </div>
            </section>

            <section id="about" class="max-w-6xl mx-auto px-4 py-20">
                <h2 class="text-3xl font-bold mb-6">"About"</h2>
                <p class="text-gray-600 dark:text-gray-400 max-w-3xl">
                    "I design and maintain control systems for industrial plants, build firmware for \
                     STM32-based devices, and apply data analysis to keep equipment running."
                </p>
            </section>

            <section id="skills" class="max-w-6xl mx-auto px-4 py-20">
                <h2 class="text-3xl font-bold mb-6">"Skills"</h2>
                <SkillsPanel/>
            </section>

            <section id="contact" class="max-w-6xl mx-auto px-4 py-20">
                <h2 class="text-3xl font-bold mb-6">"Contact"</h2>
                <p class="text-gray-600 dark:text-gray-400">
                    "Reach me at "
                    <a href="mailto:hello@example.com" class="text-primary">"hello@example.com"</a>
                </p>
            </section>
        </main>
        <footer class="py-8 text-center text-sm text-gray-500 dark:text-gray-400 bg-white dark:bg-gray-900">
            <AnchorLink href="#hero">"Back to top"</AnchorLink>
        </footer>
    }
}
