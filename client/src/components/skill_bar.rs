//! One skill block: label, description, counter, and progress bar.
//!
//! ARCHITECTURE
//! ============
//! The counter text and `aria-valuenow` both render from `progress_outputs`
//! of one `displayed` signal, so they cannot disagree. The animation starts
//! the first time the surrounding `RevealState` releases this skill and never
//! restarts. Frames are sampled on the monotonic `performance.now()` clock.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::util::progress::ProgressAnimation;
use crate::state::skills::SkillRecord;
use crate::util::progress::progress_outputs;
use crate::util::visibility::RevealState;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Start the counter run once the counter and bar are mounted.
///
/// Missing sub-elements make this a no-op.
#[cfg(feature = "hydrate")]
fn animate(
    target: u8,
    counter: NodeRef<leptos::html::Span>,
    bar: NodeRef<leptos::html::Div>,
    displayed: RwSignal<u8>,
    bar_animating: RwSignal<bool>,
) {
    if counter.get_untracked().is_none() || bar.get_untracked().is_none() {
        return;
    }
    let Some(start_ms) = now_ms() else {
        displayed.set(target);
        return;
    };
    bar_animating.set(true);
    request_frame(ProgressAnimation::new(target, start_ms), displayed);
}

/// Monotonic page clock; shares its time origin with rAF timestamps.
#[cfg(feature = "hydrate")]
fn now_ms() -> Option<f64> {
    web_sys::window()?.performance().map(|p| p.now())
}

#[cfg(feature = "hydrate")]
fn request_frame(mut run: ProgressAnimation, displayed: RwSignal<u8>) {
    let Some(window) = web_sys::window() else {
        displayed.set(run.target());
        return;
    };
    let cb = Closure::once_into_js(move |ts: f64| {
        let frame = run.frame(ts);
        displayed.set(frame.value);
        if !frame.finished {
            request_frame(run, displayed);
        }
    });
    if window.request_animation_frame(cb.unchecked_ref()).is_err() {
        displayed.set(run.target());
    }
}

/// Progress bar for a single skill record.
///
/// Expects an `RwSignal<RevealState>` context from `SkillsPanel`.
#[component]
pub fn SkillBar(skill: SkillRecord) -> impl IntoView {
    let reveal = expect_context::<RwSignal<RevealState>>();
    let displayed = RwSignal::new(0_u8);
    let outputs = Memo::new(move |_| progress_outputs(displayed.get()));
    let bar_animating = RwSignal::new(false);
    let counter_ref = NodeRef::<leptos::html::Span>::new();
    let bar_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        if !reveal.with(|state| state.is_released(skill.id)) {
            return false;
        }
        log::debug!("animating skill {} to {}%", skill.id, skill.percent);
        animate(skill.percent, counter_ref, bar_ref, displayed, bar_animating);
        true
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (reveal, counter_ref, bar_ref);

    view! {
        <div
            class="skill-item mb-6 last:mb-0"
            role="progressbar"
            aria-valuenow=move || outputs.get().aria_value_now
            aria-valuemin="0"
            aria-valuemax="100"
            aria-label=skill.aria_label()
            data-skill-id=skill.id
            data-skill-percent=skill.percent.to_string()
        >
            <div class="flex justify-between items-center mb-2">
                <div>
                    <h4 class="text-lg font-semibold text-gray-900 dark:text-white">{skill.label}</h4>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{skill.description}</p>
                </div>
                <span class="text-2xl font-bold text-primary">
                    <span class="skill-percent-value" node_ref=counter_ref>
                        {move || outputs.get().counter}
                    </span>
                    "%"
                </span>
            </div>

            <div class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-3 overflow-hidden">
                <div
                    class="progress-bar h-full bg-gradient-to-r from-primary to-secondary rounded-full"
                    class:animate=move || bar_animating.get()
                    style=skill.bar_style()
                    node_ref=bar_ref
                ></div>
            </div>
        </div>
    }
}
