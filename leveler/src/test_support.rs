//! Test-only helpers for building rigs and replaying decisions.

use crate::core::engine::decide;
use crate::core::error::DecisionError;
use crate::core::rig::Rig;
use crate::core::types::Action;

/// Create a rig with the claw empty.
pub fn empty_claw(claw_position: usize, stacks: &[i64]) -> Rig {
    Rig::new(claw_position, stacks.to_vec(), false)
}

/// Create a rig with a box in the claw.
pub fn holding_box(claw_position: usize, stacks: &[i64]) -> Rig {
    Rig::new(claw_position, stacks.to_vec(), true)
}

/// Decide for a rig using the default limits.
pub fn decide_rig(rig: &Rig) -> Result<Action, DecisionError> {
    let claw = i64::try_from(rig.claw_position).unwrap_or(i64::MAX);
    decide(claw, &rig.stacks, i64::from(rig.holding))
}

/// Boxes above their stack's target, summed over all stacks.
pub fn misplaced_boxes(stacks: &[i64], holding: bool) -> i64 {
    let total = stacks.iter().sum::<i64>() + i64::from(holding);
    let stack_amount = stacks.len() as i64;
    let per_stack = total / stack_amount;
    let leftover = total % stack_amount;
    stacks
        .iter()
        .enumerate()
        .map(|(index, &amount)| {
            let required = per_stack + i64::from((index as i64) < leftover);
            (amount - required).max(0)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misplaced_counts_boxes_above_target() {
        assert_eq!(misplaced_boxes(&[3, 3, 1, 4], false), 2);
        assert_eq!(misplaced_boxes(&[3, 3, 3, 2], false), 0);
    }
}
