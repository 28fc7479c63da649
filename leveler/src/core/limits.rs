//! Physical bounds of the leveling rig.
//!
//! The defaults describe the reference machine: up to eight stacks, sixteen
//! boxes in total and a claw that travels over positions `0..=7`.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

pub const MIN_BOXES_AMOUNT: u32 = 1;
pub const MAX_BOXES_AMOUNT: u32 = 16;
pub const MIN_BOXES_PER_STACK: u32 = 0;
/// Only used as a sentinel by the uncompleted-stack search; inputs may exceed it.
pub const MAX_BOXES_PER_STACK: u32 = 5;
pub const MIN_CLAW_POSITION: usize = 0;
pub const MAX_CLAW_POSITION: usize = 7;
pub const MIN_STACK_AMOUNT: usize = 2;
pub const MAX_STACK_AMOUNT: usize = 8;

/// Immutable settings record passed by reference into every decision.
///
/// Missing fields default to the reference machine's bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Limits {
    /// Lower bound on the stacked boxes (the held box is not counted).
    pub min_boxes_amount: u32,
    /// Upper bound on the stacked boxes (the held box is not counted).
    pub max_boxes_amount: u32,
    pub min_boxes_per_stack: u32,
    pub max_boxes_per_stack: u32,
    pub min_claw_position: usize,
    pub max_claw_position: usize,
    pub min_stack_amount: usize,
    pub max_stack_amount: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_boxes_amount: MIN_BOXES_AMOUNT,
            max_boxes_amount: MAX_BOXES_AMOUNT,
            min_boxes_per_stack: MIN_BOXES_PER_STACK,
            max_boxes_per_stack: MAX_BOXES_PER_STACK,
            min_claw_position: MIN_CLAW_POSITION,
            max_claw_position: MAX_CLAW_POSITION,
            min_stack_amount: MIN_STACK_AMOUNT,
            max_stack_amount: MAX_STACK_AMOUNT,
        }
    }
}

impl Limits {
    pub fn validate(&self) -> Result<()> {
        if self.min_boxes_amount > self.max_boxes_amount {
            return Err(anyhow!("min_boxes_amount must be <= max_boxes_amount"));
        }
        if self.min_boxes_per_stack > self.max_boxes_per_stack {
            return Err(anyhow!(
                "min_boxes_per_stack must be <= max_boxes_per_stack"
            ));
        }
        if self.min_claw_position > self.max_claw_position {
            return Err(anyhow!("min_claw_position must be <= max_claw_position"));
        }
        if self.min_stack_amount == 0 {
            return Err(anyhow!("min_stack_amount must be > 0"));
        }
        if self.min_stack_amount > self.max_stack_amount {
            return Err(anyhow!("min_stack_amount must be <= max_stack_amount"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_machine() {
        let limits = Limits::default();
        assert_eq!(limits.max_boxes_amount, 16);
        assert_eq!(limits.max_boxes_per_stack, 5);
        assert_eq!(limits.max_claw_position, 7);
        assert_eq!(limits.max_stack_amount, 8);
        limits.validate().expect("defaults are valid");
    }

    #[test]
    fn validate_rejects_inverted_stack_bounds() {
        let limits = Limits {
            min_stack_amount: 9,
            ..Limits::default()
        };
        let err = limits.validate().expect_err("inverted bounds");
        assert!(err.to_string().contains("min_stack_amount"));
    }

    #[test]
    fn validate_rejects_zero_stacks() {
        let limits = Limits {
            min_stack_amount: 0,
            ..Limits::default()
        };
        assert!(limits.validate().is_err());
    }
}
