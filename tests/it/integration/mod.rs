//! Integration tests for the mounted carousel.
//!
//! These drive raw pointer and resize events through the whole pipeline and
//! check the resulting states, sink writes and gesture phases.

mod gesture_flow_tests;
mod scenario_tests;
