//! Single-step decision for the leveling claw.
//!
//! Every call is independent: validate, compute targets, check completion,
//! then pick a move depending on whether the claw holds a box.

use crate::core::error::DecisionError;
use crate::core::limits::Limits;
use crate::core::locator::{nearest_overloaded, nearest_uncompleted};
use crate::core::targets::{Targets, is_finished};
use crate::core::types::{Action, Snapshot};
use crate::core::validate::validate_arguments;

/// Decide the next action using the reference machine's limits.
pub fn decide(claw_position: i64, stacks: &[i64], holding: i64) -> Result<Action, DecisionError> {
    decide_with_limits(claw_position, stacks, holding, &Limits::default())
}

/// Decide the next action under explicit limits.
pub fn decide_with_limits(
    claw_position: i64,
    stacks: &[i64],
    holding: i64,
    limits: &Limits,
) -> Result<Action, DecisionError> {
    let snapshot = validate_arguments(claw_position, stacks, holding, limits)?;
    Ok(decide_snapshot(&snapshot, limits))
}

/// Decide the next action for an already validated snapshot.
///
/// # Panics
///
/// Panics if `snapshot.claw_position` is not an index into
/// `snapshot.stacks` (including when `stacks` is empty). Snapshots returned
/// by `validate_arguments` always satisfy this.
pub fn decide_snapshot(snapshot: &Snapshot, limits: &Limits) -> Action {
    assert!(
        snapshot.claw_position < snapshot.stacks.len(),
        "claw position {} outside {} stacks",
        snapshot.claw_position,
        snapshot.stacks.len()
    );
    let targets = Targets::for_snapshot(snapshot);
    let stacks = snapshot.stacks.as_slice();
    let claw = snapshot.claw_position;

    if is_finished(stacks, &targets) {
        return Action::Finished;
    }

    if snapshot.holding {
        if targets.is_uncompleted(claw, stacks[claw]) {
            return Action::Place;
        }
        return match nearest_uncompleted(stacks, claw, &targets, limits.max_boxes_per_stack) {
            Some(target) => direction(claw, target),
            None => Action::Warning,
        };
    }

    match nearest_overloaded(stacks, claw, &targets) {
        Some(target) if target == claw => Action::Pick,
        Some(target) => direction(claw, target),
        // Independent of `is_finished`: an empty claw with nothing overloaded is done.
        None => Action::Finished,
    }
}

fn direction(claw: usize, target: usize) -> Action {
    if target > claw {
        Action::Right
    } else {
        Action::Left
    }
}
