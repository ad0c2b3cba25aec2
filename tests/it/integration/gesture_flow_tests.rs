//! Gesture Flow Integration Tests

use crate::helpers::{Gesture, WIDTH, mount, mount_with, record_states, swipe};
use std::cell::RefCell;
use std::rc::Rc;
use swipeboard::StaticHost;
use swipeboard::input::{GesturePhase, InputModality, PointerStream, RawPointerInput, TouchPoint};

#[test]
fn test_one_state_per_event_in_arrival_order() {
    let carousel = mount(3);
    let states = record_states(&carousel);

    Gesture::at(500.0)
        .drag_by(-10.0)
        .drag_by(-60.0)
        .drag_by(-80.0)
        .run(&carousel);

    let offsets: Vec<f32> = states.borrow().iter().map(|s| s.current_offset).collect();
    assert_eq!(offsets, vec![-10.0, -60.0, -80.0, -300.0]);
}

#[test]
fn test_sink_receives_every_target_offset() {
    let carousel = mount(3);
    let states = record_states(&carousel);

    swipe(&carousel, -100.0);

    let sink = carousel.sink();
    assert_eq!(sink.writes().len(), states.borrow().len());
    assert_eq!(sink.current(), Some("translateX(-300px)"));
}

#[test]
fn test_new_press_supersedes_open_gesture() {
    let carousel = mount(3);
    let states = record_states(&carousel);

    carousel.press(100.0);
    carousel.move_to(90.0);
    carousel.press(300.0);
    carousel.move_to(310.0);

    let offsets: Vec<f32> = states.borrow().iter().map(|s| s.current_offset).collect();
    assert_eq!(offsets, vec![-10.0, 10.0]);

    // The commit carries the new gesture's delta (+10), below threshold.
    carousel.release(310.0);
    assert_eq!(carousel.state().panel_index, 0);
    assert_eq!(states.borrow().len(), 3);
}

#[test]
fn test_abandoned_gesture_never_commits() {
    let carousel = mount(3);
    let states = record_states(&carousel);

    Gesture::at(500.0)
        .drag_by(-80.0)
        .drag_by(-120.0)
        .abandoned()
        .run(&carousel);
    assert!(carousel.is_tracking());
    assert_eq!(carousel.phase(), GesturePhase::Dragging { delta: -120.0 });

    // A fresh press with no moves replaces the gesture; its release has
    // nothing to commit.
    carousel.press(0.0);
    carousel.release(0.0);

    assert_eq!(states.borrow().len(), 2);
    assert_eq!(carousel.state().panel_index, 0);
    assert!(!carousel.is_tracking());
}

#[test]
fn test_exactly_one_commit_per_completed_gesture() {
    let carousel = mount(5);
    let commits = Rc::new(RefCell::new(0));
    let c = commits.clone();
    let _sub = carousel.subscribe_states(move |state| {
        if state.is_at_rest() {
            *c.borrow_mut() += 1;
        }
    });

    for _ in 0..3 {
        swipe(&carousel, -100.0);
        carousel.release(0.0);
    }

    assert_eq!(*commits.borrow(), 3);
    assert_eq!(carousel.state().panel_index, 3);
}

#[test]
fn test_release_without_press_is_ignored() {
    let carousel = mount(3);
    let states = record_states(&carousel);

    carousel.move_to(10.0);
    carousel.release(10.0);

    assert!(states.borrow().is_empty());
    assert!(carousel.phase().is_idle());
}

#[test]
fn test_phase_follows_gesture() {
    let carousel = mount(3);
    assert!(carousel.phase().is_idle());

    carousel.press(200.0);
    assert!(carousel.phase().is_idle());

    carousel.move_to(170.0);
    assert_eq!(carousel.phase().live_delta(), Some(-30.0));

    carousel.release(170.0);
    assert!(carousel.phase().is_idle());
}

#[test]
fn test_index_stays_in_bounds_for_any_swipe_sequence() {
    let carousel = mount(4);
    let deltas = [
        -200.0, -31.0, -500.0, -45.0, -90.0, 31.0, 400.0, 60.0, 35.0, 1000.0, -29.0, 30.0,
    ];

    for delta in deltas.iter().cycle().take(60) {
        let before = carousel.state().panel_index;
        swipe(&carousel, *delta);
        let state = carousel.state();

        assert!(state.panel_index <= 3);
        assert!(state.panel_index.abs_diff(before) <= 1);
        assert_eq!(state.current_offset, -(state.panel_index as f32 * WIDTH));
        assert!(state.is_at_rest());
    }
}

#[test]
fn test_touch_events_drive_touch_host() {
    let carousel = mount_with(StaticHost::new("carousel", WIDTH, 3).with_touch(true));
    assert_eq!(carousel.modality(), InputModality::Touch);

    let touch = |x: f32| RawPointerInput::Touch {
        touches: vec![TouchPoint { page_x: x, page_y: 0.0 }],
    };

    assert_eq!(carousel.dispatch("mousedown", &RawPointerInput::Mouse { page_x: 0.0 }), None);
    assert_eq!(carousel.dispatch("touchstart", &touch(250.0)), Some(PointerStream::Press));
    carousel.dispatch("touchmove", &touch(210.0));
    carousel.dispatch("touchmove", &touch(190.0));
    carousel.dispatch("touchend", &RawPointerInput::Touch { touches: vec![] });

    assert_eq!(carousel.state().panel_index, 1);
}

#[test]
fn test_width_stream_replays_latest() {
    let carousel = mount(3);
    carousel.resize(500.0);

    let widths = Rc::new(RefCell::new(Vec::new()));
    let w = widths.clone();
    let _sub = carousel.widths().subscribe(move |width| w.borrow_mut().push(*width));
    carousel.resize(520.0);

    assert_eq!(*widths.borrow(), vec![500.0, 520.0]);
}

#[test]
fn test_unmount_detaches_input() {
    let carousel = mount(3);
    let states = record_states(&carousel);

    carousel.press(100.0);
    carousel.unmount();
    carousel.move_to(0.0);
    swipe(&carousel, -100.0);

    assert!(states.borrow().is_empty());
    assert_eq!(carousel.state().panel_index, 0);
}
