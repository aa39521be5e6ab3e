//! Integration test harness.

mod helpers;

mod binary_test;
mod show_test;
