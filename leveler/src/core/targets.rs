//! Even-distribution targets and the completion check.

use crate::core::types::Snapshot;

/// Per-call targets derived from the total box count.
///
/// The `leftover` leftmost stacks are entitled to `boxes_per_stack + 1`
/// boxes; every other stack to `boxes_per_stack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Targets {
    pub boxes_per_stack: u64,
    /// Always `< stacks.len()`.
    pub leftover: usize,
}

impl Targets {
    /// Compute targets for stacked boxes plus the held box, if any.
    ///
    /// `stacks` must be non-empty. Sums in `u64` so configured box limits up
    /// to `u32::MAX` plus the held box cannot overflow.
    pub fn compute(stacks: &[u32], holding: bool) -> Self {
        let stacked: u64 = stacks.iter().map(|&amount| u64::from(amount)).sum();
        let total = stacked + u64::from(holding);
        let stack_amount = stacks.len() as u64;
        Self {
            boxes_per_stack: total / stack_amount,
            leftover: (total % stack_amount) as usize,
        }
    }

    pub fn for_snapshot(snapshot: &Snapshot) -> Self {
        Self::compute(&snapshot.stacks, snapshot.holding)
    }

    /// Boxes the stack at `index` must end up with.
    pub fn required(&self, index: usize) -> u64 {
        if index < self.leftover {
            self.boxes_per_stack + 1
        } else {
            self.boxes_per_stack
        }
    }

    /// The stack still needs boxes to reach its target.
    pub fn is_uncompleted(&self, index: usize, amount: u32) -> bool {
        u64::from(amount) < self.required(index)
    }

    /// The stack holds more boxes than its target.
    pub fn is_overloaded(&self, index: usize, amount: u32) -> bool {
        u64::from(amount) > self.required(index)
    }
}

/// True when every stack has reached its target. The held box is ignored.
pub fn is_finished(stacks: &[u32], targets: &Targets) -> bool {
    stacks
        .iter()
        .enumerate()
        .all(|(index, &amount)| !targets.is_uncompleted(index, amount))
}
