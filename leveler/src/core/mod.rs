//! Deterministic, pure logic for the leveling claw.
//!
//! Core modules must be free of I/O side effects and logging. They operate on
//! caller-supplied snapshots and return deterministic outputs suitable for
//! tests.

pub mod brackets;
pub mod engine;
pub mod error;
pub mod limits;
pub mod locator;
pub mod rig;
pub mod targets;
pub mod types;
pub mod validate;
