use super::*;

#[derive(Default)]
struct MemoryStore {
    value: Option<String>,
    writes: usize,
}

impl MemoryStore {
    fn with(value: &str) -> Self {
        Self { value: Some(value.to_owned()), writes: 0 }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.value.clone()
    }

    fn set(&mut self, value: &str) {
        self.value = Some(value.to_owned());
        self.writes += 1;
    }
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn stored_dark_wins_over_light_environment() {
    let store = MemoryStore::with("dark");
    assert!(resolve(stored_preference(&store), false));
}

#[test]
fn stored_light_wins_over_dark_environment() {
    let store = MemoryStore::with("light");
    assert!(!resolve(stored_preference(&store), true));
}

#[test]
fn absent_preference_with_dark_environment_is_dark_without_writing() {
    let store = MemoryStore::default();
    assert!(resolve(stored_preference(&store), true));
    assert_eq!(store.writes, 0);
    assert!(store.value.is_none());
}

#[test]
fn unrecognized_stored_value_falls_back_to_environment() {
    let store = MemoryStore::with("sepia");
    assert_eq!(stored_preference(&store), None);
    assert!(resolve(stored_preference(&store), true));
    assert!(!resolve(stored_preference(&store), false));
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_persists_explicit_choice() {
    let mut store = MemoryStore::default();
    assert!(toggle_in(&mut store, false));
    assert_eq!(store.value.as_deref(), Some("dark"));
    assert!(!toggle_in(&mut store, true));
    assert_eq!(store.value.as_deref(), Some("light"));
}

#[test]
fn toggling_twice_restores_preference_and_state() {
    let mut store = MemoryStore::with("light");
    let initial = resolve(stored_preference(&store), true);
    let once = toggle_in(&mut store, initial);
    let twice = toggle_in(&mut store, once);
    assert_eq!(twice, initial);
    assert_eq!(store.value.as_deref(), Some("light"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn toggle_outside_browser_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

// =============================================================
// Environment changes
// =============================================================

#[test]
fn environment_change_followed_without_stored_choice() {
    let store = MemoryStore::default();
    assert_eq!(follow_environment(&store, true), Some(true));
    assert_eq!(follow_environment(&store, false), Some(false));
}

#[test]
fn environment_change_ignored_with_stored_choice() {
    let store = MemoryStore::with("light");
    assert_eq!(follow_environment(&store, true), None);
}

#[test]
fn environment_change_followed_with_unrecognized_stored_value() {
    let store = MemoryStore::with("sepia");
    assert_eq!(follow_environment(&store, true), Some(true));
}

#[test]
fn preference_strings_round_trip() {
    for pref in [ThemePreference::Dark, ThemePreference::Light] {
        assert_eq!(ThemePreference::parse(pref.as_str()), Some(pref));
    }
    assert_eq!(ThemePreference::from_dark(true), ThemePreference::Dark);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_false_outside_browser() {
    assert!(!read_preference());
}
