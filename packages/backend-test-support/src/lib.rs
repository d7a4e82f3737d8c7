//! Test support utilities shared by the Mastermind backend integration tests.
//!
//! Provides the unified test logging initializer and helpers for asserting
//! problem-details error responses without depending on backend types.

pub mod logging;
pub mod problem_details;
