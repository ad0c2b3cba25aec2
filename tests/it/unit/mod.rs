//! Unit tests for swipeboard.

mod perf_tests;
