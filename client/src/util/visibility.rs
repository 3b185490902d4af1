//! One-shot visibility gate for skill bar reveals.
//!
//! `RevealState` is the pure bookkeeping: which elements are still observed
//! and which have been released for animation. The browser half installs an
//! `IntersectionObserver` that feeds it; when the observer API is missing the
//! caller releases everything immediately instead.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

use std::collections::HashSet;

/// Fraction of an element's area that must be on screen to trigger.
pub const VISIBILITY_THRESHOLD: f64 = 0.2;

/// Delay between the trigger firing and the element's release.
pub const REVEAL_DELAY_MS: u32 = 100;

/// Observation and release bookkeeping for a set of elements keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    observed: HashSet<String>,
    released: HashSet<String>,
}

impl RevealState {
    /// Start observing `id`. Elements that already triggered stay retired.
    pub fn observe(&mut self, id: &str) {
        if !self.released.contains(id) {
            self.observed.insert(id.to_owned());
        }
    }

    /// Record a visibility report.
    ///
    /// Returns `true` only the first time an observed element reaches the
    /// threshold; the element is then dropped from observation for good.
    pub fn on_visible(&mut self, id: &str, ratio: f64) -> bool {
        if ratio < VISIBILITY_THRESHOLD {
            return false;
        }
        self.observed.remove(id)
    }

    /// Mark `id` as ready to animate.
    pub fn release(&mut self, id: &str) {
        self.observed.remove(id);
        self.released.insert(id.to_owned());
    }

    /// Fallback path: release every observed element at once.
    pub fn release_all(&mut self) {
        self.released.extend(self.observed.drain());
    }

    #[must_use]
    pub fn is_released(&self, id: &str) -> bool {
        self.released.contains(id)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{intersection_observer_supported, observe_reveals};

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_timers::callback::Timeout;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::{REVEAL_DELAY_MS, RevealState, VISIBILITY_THRESHOLD};

    /// Attribute carrying the reveal key on each observed element.
    const ID_ATTR: &str = "data-skill-id";

    /// Whether the runtime exposes `IntersectionObserver`.
    pub fn intersection_observer_supported() -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        js_sys::Reflect::has(&window, &"IntersectionObserver".into()).unwrap_or(false)
    }

    /// Observe `elements` and release each one into `reveal` after it first
    /// crosses the threshold.
    ///
    /// Returns `false` when the observer could not be created; the caller is
    /// expected to fall back to releasing everything.
    pub fn observe_reveals(elements: Vec<web_sys::Element>, reveal: RwSignal<RevealState>) -> bool {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let Some(id) = target.get_attribute(ID_ATTR) else {
                        continue;
                    };
                    let ratio = entry.intersection_ratio();
                    let mut fired = false;
                    reveal.update_untracked(|state| fired = state.on_visible(&id, ratio));
                    if !fired {
                        continue;
                    }
                    observer.unobserve(&target);
                    log::debug!("skill {id} visible at {ratio:.2}; revealing in {REVEAL_DELAY_MS}ms");
                    Timeout::new(REVEAL_DELAY_MS, move || {
                        reveal.update(|state| state.release(&id));
                    })
                    .forget();
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&VISIBILITY_THRESHOLD.into());
        let Ok(observer) =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        else {
            return false;
        };
        // Observer and elements live as long as the page.
        callback.forget();

        reveal.update_untracked(|state| {
            for element in &elements {
                if let Some(id) = element.get_attribute(ID_ATTR) {
                    state.observe(&id);
                }
            }
        });
        for element in &elements {
            observer.observe(element);
        }
        true
    }
}
