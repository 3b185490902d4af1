use super::*;

fn observing(ids: &[&str]) -> RevealState {
    let mut state = RevealState::default();
    for id in ids {
        state.observe(id);
    }
    state
}

#[test]
fn below_threshold_does_not_trigger() {
    let mut state = observing(&["plc"]);
    assert!(!state.on_visible("plc", 0.1));
    assert!(state.on_visible("plc", 0.5));
}

#[test]
fn threshold_ratio_triggers_once() {
    let mut state = observing(&["plc"]);
    assert!(state.on_visible("plc", VISIBILITY_THRESHOLD));
    assert!(!state.on_visible("plc", 1.0));
    assert!(!state.on_visible("plc", 0.5));
}

#[test]
fn unobserved_element_never_triggers() {
    let mut state = observing(&["plc"]);
    assert!(!state.on_visible("cloud", 1.0));
}

#[test]
fn release_marks_element_ready_and_retires_it() {
    let mut state = observing(&["plc", "cloud"]);
    assert!(state.on_visible("plc", 0.3));
    assert!(!state.is_released("plc"));
    state.release("plc");
    assert!(state.is_released("plc"));
    assert!(!state.is_released("cloud"));
}

#[test]
fn observing_a_released_element_is_ignored() {
    let mut state = observing(&["plc"]);
    state.release("plc");
    state.observe("plc");
    assert!(!state.on_visible("plc", 1.0));
}

#[test]
fn release_all_releases_every_observed_element() {
    let mut state = observing(&["plc", "cloud", "python"]);
    state.release_all();
    for id in ["plc", "cloud", "python"] {
        assert!(state.is_released(id));
        assert!(!state.on_visible(id, 1.0));
    }
}

#[test]
fn repeated_visibility_events_yield_one_trigger() {
    let mut state = observing(&["embedded"]);
    let fired = (0..10).filter(|_| state.on_visible("embedded", 0.9)).count();
    assert_eq!(fired, 1);
}
