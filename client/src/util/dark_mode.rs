//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies the `dark`
//! class to the `<html>` element. Toggle writes back to `localStorage` and
//! updates the class. Browser access sits behind `PreferenceStore` so the
//! resolution rules can be exercised without a DOM.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const STORAGE_KEY: &str = "theme";

/// Class toggled on the document root.
pub const DARK_CLASS: &str = "dark";

/// Media query describing the environment's color scheme preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Explicit user choice persisted under `STORAGE_KEY`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
}

impl ThemePreference {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}

/// Single-key string storage for the theme preference.
pub trait PreferenceStore {
    fn get(&self) -> Option<String>;
    fn set(&mut self, value: &str);
}

/// Recognized stored preference, if any.
pub fn stored_preference(store: &impl PreferenceStore) -> Option<ThemePreference> {
    store.get().as_deref().and_then(ThemePreference::parse)
}

/// Dark if the user chose dark, or made no choice and the environment prefers dark.
#[must_use]
pub fn resolve(stored: Option<ThemePreference>, env_prefers_dark: bool) -> bool {
    match stored {
        Some(pref) => pref == ThemePreference::Dark,
        None => env_prefers_dark,
    }
}

/// Flip `current`, persist the explicit choice, and return the new state.
pub fn toggle_in(store: &mut impl PreferenceStore, current: bool) -> bool {
    let next = !current;
    store.set(ThemePreference::from_dark(next).as_str());
    next
}

/// React to an environment preference change.
///
/// Returns the state to apply, or `None` when an explicit user choice pins
/// the theme. Only a recognized `"dark"`/`"light"` value pins it; any other
/// stored string counts as no choice, unlike a plain non-empty check.
pub fn follow_environment(store: &impl PreferenceStore, env_prefers_dark: bool) -> Option<bool> {
    if stored_preference(store).is_some() {
        return None;
    }
    Some(env_prefers_dark)
}

/// Read the dark mode preference from localStorage.
///
/// Returns `true` if the user previously enabled dark mode, or if the system
/// prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        resolve(stored_preference(&browser::LocalStore), browser::env_prefers_dark())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        browser::apply_class(enabled);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    #[cfg(feature = "hydrate")]
    let next = toggle_in(&mut browser::LocalStore, current);
    #[cfg(not(feature = "hydrate"))]
    let next = !current;
    apply(next);
    next
}

/// Invoke `on_change` with the new state whenever the environment preference
/// flips while no explicit choice is stored.
pub fn watch_environment(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        browser::watch_environment(on_change);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::{DARK_CLASS, PREFERS_DARK_QUERY, PreferenceStore, STORAGE_KEY, follow_environment};

    /// `localStorage` under `STORAGE_KEY`. Storage failures read as absent
    /// and drop writes.
    pub struct LocalStore;

    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(_) => None,
        }
    }

    impl PreferenceStore for LocalStore {
        fn get(&self) -> Option<String> {
            match storage()?.get_item(STORAGE_KEY) {
                Ok(value) => value,
                Err(_) => None,
            }
        }

        fn set(&mut self, value: &str) {
            let Some(storage) = storage() else {
                return;
            };
            if storage.set_item(STORAGE_KEY, value).is_err() {
                log::warn!("theme preference not persisted");
            }
        }
    }

    fn media_query() -> Option<web_sys::MediaQueryList> {
        match web_sys::window()?.match_media(PREFERS_DARK_QUERY) {
            Ok(mq) => mq,
            Err(_) => None,
        }
    }

    pub fn env_prefers_dark() -> bool {
        media_query().is_some_and(|mq| mq.matches())
    }

    pub fn apply_class(enabled: bool) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        let class_list = root.class_list();
        let result = if enabled { class_list.add_1(DARK_CLASS) } else { class_list.remove_1(DARK_CLASS) };
        if result.is_err() {
            log::warn!("failed to update root theme class");
        }
    }

    pub fn watch_environment(on_change: impl Fn(bool) + 'static) {
        let Some(mq) = media_query() else {
            return;
        };
        let source = mq.clone();
        let listener = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Some(dark) = follow_environment(&LocalStore, source.matches()) {
                on_change(dark);
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        if mq
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("color scheme change listener not installed");
            return;
        }
        // Listener lives as long as the page.
        listener.forget();
    }
}
