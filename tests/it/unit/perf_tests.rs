//! Unit tests for perf module.

use swipeboard::perf::{ScopedTimer, is_profiling_enabled, set_profiling_enabled};

#[test]
fn test_scoped_timer_within_budget() {
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert!(timer.elapsed_ms() >= 0.0);
    assert!(!timer.is_over_budget());
}

#[test]
fn test_negative_budget_is_exceeded() {
    let timer = ScopedTimer::new("test_op", -1.0);
    assert!(timer.is_over_budget());
}

#[test]
fn test_runtime_toggle() {
    let initial = is_profiling_enabled();

    set_profiling_enabled(true);
    assert!(is_profiling_enabled());
    // Dropping with profiling on must not panic, over budget or not.
    drop(ScopedTimer::new("toggle_op", -1.0));

    set_profiling_enabled(initial);
    assert_eq!(is_profiling_enabled(), initial);
}

#[test]
fn test_profile_scope_macro_compiles_in_place() {
    fn work() -> u32 {
        swipeboard::profile_scope!("work");
        swipeboard::profile_scope!("work_with_budget", 5.0);
        41 + 1
    }
    assert_eq!(work(), 42);
}
