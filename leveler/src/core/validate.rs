//! Argument validation for decision requests.
//!
//! Checks run in a fixed order and stop at the first violation:
//! claw range, claw within the stacks, holding flag, stack amount,
//! per-stack amounts, total stacked boxes.

use crate::core::error::DecisionError;
use crate::core::limits::Limits;
use crate::core::types::Snapshot;

/// Validate raw integer arguments and build a [`Snapshot`].
///
/// The total-box bound is checked against the stacked boxes only; the box in
/// the claw is not counted.
pub fn validate_arguments(
    claw_position: i64,
    stacks: &[i64],
    holding: i64,
    limits: &Limits,
) -> Result<Snapshot, DecisionError> {
    let claw = usize::try_from(claw_position)
        .ok()
        .filter(|pos| (limits.min_claw_position..=limits.max_claw_position).contains(pos))
        .ok_or_else(|| {
            DecisionError::InvalidClawPosition(format!(
                "{} is not between {} and {}",
                claw_position, limits.min_claw_position, limits.max_claw_position
            ))
        })?;

    if claw >= stacks.len() {
        return Err(DecisionError::InvalidClawPosition(format!(
            "{} must be less than the amount of stacks ({})",
            claw,
            stacks.len()
        )));
    }

    let holding = match holding {
        0 => false,
        1 => true,
        other => {
            return Err(DecisionError::InvalidHoldingFlag(format!(
                "got {}, expected 0 or 1",
                other
            )));
        }
    };

    if !(limits.min_stack_amount..=limits.max_stack_amount).contains(&stacks.len()) {
        return Err(DecisionError::InvalidStackCount(format!(
            "{} stacks, expected between {} and {}",
            stacks.len(),
            limits.min_stack_amount,
            limits.max_stack_amount
        )));
    }

    let mut total: u64 = 0;
    for (index, &amount) in stacks.iter().enumerate() {
        if amount < i64::from(limits.min_boxes_per_stack) {
            return Err(DecisionError::InvalidBoxAmountPerStack(format!(
                "stack {} has {} boxes, expected at least {}",
                index, amount, limits.min_boxes_per_stack
            )));
        }
        total = total.saturating_add(amount.unsigned_abs());
    }

    if !(u64::from(limits.min_boxes_amount)..=u64::from(limits.max_boxes_amount)).contains(&total)
    {
        return Err(DecisionError::InvalidTotalBoxCount(format!(
            "{} stacked boxes, expected between {} and {}",
            total, limits.min_boxes_amount, limits.max_boxes_amount
        )));
    }

    let stacks = stacks
        .iter()
        .map(|&amount| u32::try_from(amount))
        .collect::<Result<Vec<u32>, _>>()
        .map_err(|err| DecisionError::InvalidBoxAmountPerStack(err.to_string()))?;

    Ok(Snapshot {
        claw_position: claw,
        stacks,
        holding,
    })
}
