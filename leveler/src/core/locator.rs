//! Nearest-candidate search over the stacks.
//!
//! Both searches scan every stack left to right and keep the first stack at
//! the minimal distance from the claw, so the lower index wins ties.

use crate::core::targets::Targets;

/// Nearest stack that can still accept a box.
///
/// Stacks at exactly `max_boxes_per_stack` are skipped. Returns `None` when
/// no stack qualifies (the held box has nowhere to go).
pub fn nearest_uncompleted(
    stacks: &[u32],
    claw_position: usize,
    targets: &Targets,
    max_boxes_per_stack: u32,
) -> Option<usize> {
    nearest(
        claw_position,
        stacks
            .iter()
            .enumerate()
            .filter(|&(_, &amount)| amount != max_boxes_per_stack)
            .filter(|&(index, &amount)| targets.is_uncompleted(index, amount))
            .map(|(index, _)| index),
    )
}

/// Nearest stack holding more boxes than its target.
///
/// Returns `None` when nothing is left to redistribute.
pub fn nearest_overloaded(
    stacks: &[u32],
    claw_position: usize,
    targets: &Targets,
) -> Option<usize> {
    nearest(
        claw_position,
        stacks
            .iter()
            .enumerate()
            .filter(|&(index, &amount)| targets.is_overloaded(index, amount))
            .map(|(index, _)| index),
    )
}

fn nearest(claw_position: usize, candidates: impl Iterator<Item = usize>) -> Option<usize> {
    // `min_by_key` keeps the first of several equal minima.
    candidates.min_by_key(|&index| index.abs_diff(claw_position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::limits::MAX_BOXES_PER_STACK;

    #[test]
    fn uncompleted_prefers_nearest_stack() {
        let stacks = [0, 1, 0, 1, 0, 1, 0, 0];
        let targets = Targets::compute(&stacks, true);
        assert_eq!(
            nearest_uncompleted(&stacks, 7, &targets, MAX_BOXES_PER_STACK),
            Some(2)
        );
    }

    #[test]
    fn uncompleted_tie_goes_to_lower_index() {
        // Targets: 2 per stack, stacks 1 and 3 are equally short and equidistant.
        let stacks = [2, 1, 3, 1, 2];
        let targets = Targets::compute(&stacks, true);
        assert_eq!(targets.boxes_per_stack, 2);
        assert_eq!(
            nearest_uncompleted(&stacks, 2, &targets, MAX_BOXES_PER_STACK),
            Some(1)
        );
    }

    #[test]
    fn uncompleted_skips_stacks_at_per_stack_maximum() {
        let stacks = [5, 4, 6];
        let targets = Targets::compute(&stacks, true);
        assert_eq!(
            nearest_uncompleted(&stacks, 2, &targets, MAX_BOXES_PER_STACK),
            Some(1)
        );
    }

    #[test]
    fn uncompleted_none_when_all_at_maximum() {
        let stacks = [5, 5, 5];
        let targets = Targets::compute(&stacks, true);
        assert_eq!(
            nearest_uncompleted(&stacks, 2, &targets, MAX_BOXES_PER_STACK),
            None
        );
    }

    #[test]
    fn overloaded_includes_claw_position() {
        let stacks = [3, 3, 1, 4];
        let targets = Targets::compute(&stacks, false);
        assert_eq!(nearest_overloaded(&stacks, 3, &targets), Some(3));
    }

    #[test]
    fn overloaded_respects_leftover_entitlement() {
        let stacks = [2, 1, 1, 1, 0];
        let targets = Targets::compute(&stacks, false);
        assert_eq!(targets.leftover, 0);
        assert_eq!(nearest_overloaded(&stacks, 4, &targets), Some(0));

        // With one leftover box, stack 0 may keep its extra box.
        let stacks = [2, 1, 1, 1, 1];
        let targets = Targets::compute(&stacks, false);
        assert_eq!(targets.leftover, 1);
        assert_eq!(nearest_overloaded(&stacks, 4, &targets), None);
    }

    #[test]
    fn overloaded_tie_goes_to_lower_index() {
        let stacks = [0, 2, 0, 2, 1];
        let targets = Targets::compute(&stacks, false);
        assert_eq!(targets.boxes_per_stack, 1);
        assert_eq!(nearest_overloaded(&stacks, 2, &targets), Some(1));
    }
}
