//! Deterministic decision function for a single-claw box-leveling rig.
//!
//! Given the claw position, the boxes per stack and whether the claw holds a
//! box, the crate computes the next move (`RIGHT`, `LEFT`, `PICK`, `PLACE`,
//! `WARNING` or `FINISHED`). The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (validation, targets, candidate
//!   search, decision). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config files, simulation traces).
//!
//! [`request`] adapts untyped JSON input to the core, and [`simulate`] drives
//! the core in a closed loop against an [`simulate::Actuator`].

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod request;
pub mod simulate;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
