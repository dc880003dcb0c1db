use shared_ui::state::{ScrollState, SCROLL_THRESHOLD};

#[test]
fn flag_set_only_above_threshold() {
    for (offset, expected) in [(0.0, false), (5.0, false), (10.0, false), (10.5, true), (400.0, true)] {
        let mut state = ScrollState::default();
        state.observe(offset);
        assert_eq!(state.is_scrolled(), expected, "offset {offset}");
    }
}

#[test]
fn flag_follows_last_observation() {
    let mut state = ScrollState::default();
    assert!(state.observe(120.0));
    assert!(state.is_scrolled());
    assert!(!state.observe(60.0));
    assert!(state.observe(SCROLL_THRESHOLD));
    assert!(!state.is_scrolled());
    assert_eq!(state.last_offset(), SCROLL_THRESHOLD);
}
