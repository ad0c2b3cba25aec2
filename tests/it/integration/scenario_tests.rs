//! Reference scenarios on a three-panel, 300px carousel.

use crate::helpers::{Gesture, advance_to, mount, swipe};

#[test]
fn test_swipe_left_past_threshold_advances() {
    let carousel = mount(3);

    Gesture::at(400.0)
        .drag_by(-20.0)
        .drag_by(-50.0)
        .run(&carousel);

    let state = carousel.state();
    assert_eq!(state.panel_index, 1);
    assert_eq!(state.current_offset, -300.0);
    assert_eq!(state.target_offset, -300.0);
}

#[test]
fn test_small_drag_snaps_back() {
    let carousel = mount(3);

    Gesture::at(400.0).drag_by(-10.0).run(&carousel);

    let state = carousel.state();
    assert_eq!(state.panel_index, 0);
    assert_eq!(state.current_offset, 0.0);
}

#[test]
fn test_last_panel_clamps() {
    let carousel = mount(3);
    advance_to(&carousel, 2);
    assert_eq!(carousel.state().panel_index, 2);

    swipe(&carousel, -100.0);

    let state = carousel.state();
    assert_eq!(state.panel_index, 2);
    assert_eq!(state.current_offset, -600.0);
}

#[test]
fn test_live_drag_offsets_from_committed_panel() {
    let carousel = mount(3);
    advance_to(&carousel, 1);

    Gesture::at(100.0).drag_by(40.0).abandoned().run(&carousel);

    let state = carousel.state();
    assert_eq!(state.panel_index, 1);
    assert_eq!(state.current_offset, -260.0);
    assert_eq!(state.target_offset, -260.0);
}

#[test]
fn test_resize_applies_on_next_drop() {
    let carousel = mount(3);

    carousel.resize(400.0);
    swipe(&carousel, -40.0);

    let state = carousel.state();
    assert_eq!(state.panel_width, 400.0);
    assert_eq!(state.current_offset, -400.0);
    assert_eq!(state.panel_index, 1);
}
