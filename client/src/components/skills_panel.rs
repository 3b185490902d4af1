//! Skills section container and its reveal wiring.

use leptos::prelude::*;

use crate::components::skill_bar::SkillBar;
use crate::state::skills::SKILLS;
use crate::util::visibility::RevealState;

/// Release every skill at once, bypassing the visibility gate.
#[cfg(feature = "hydrate")]
fn release_all(reveal: RwSignal<RevealState>) {
    reveal.update(|state| {
        for skill in SKILLS {
            state.observe(skill.id);
        }
        state.release_all();
    });
}

/// Hook up visibility observation once the container is mounted.
///
/// Exactly one path runs: the observer when the runtime has one, otherwise
/// the immediate fallback.
#[cfg(feature = "hydrate")]
fn start_reveals(container: &web_sys::HtmlDivElement, reveal: RwSignal<RevealState>) {
    use crate::util::visibility::{intersection_observer_supported, observe_reveals};

    let children = container.children();
    let elements = (0..children.length())
        .filter_map(|i| children.item(i))
        .collect::<Vec<_>>();
    if intersection_observer_supported() && observe_reveals(elements, reveal) {
        return;
    }
    log::debug!("IntersectionObserver unavailable; animating skills immediately");
    release_all(reveal);
}

/// `#skills-progress-bars`: one `SkillBar` per record.
#[component]
pub fn SkillsPanel() -> impl IntoView {
    let reveal = RwSignal::new(RevealState::default());
    provide_context(reveal);
    let container_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move |installed: Option<bool>| {
        if installed == Some(true) {
            return true;
        }
        let Some(container) = container_ref.get() else {
            return false;
        };
        start_reveals(&container, reveal);
        true
    });

    view! {
        <div id="skills-progress-bars" node_ref=container_ref>
            {SKILLS.iter().map(|skill| view! { <SkillBar skill=*skill/> }).collect_view()}
        </div>
    }
}
