//! I/O helpers for leveler commands.

pub mod config;
pub mod trace;
