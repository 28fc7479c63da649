//! Shared deterministic types for the decision core.
//!
//! Everything here is rebuilt from caller-supplied snapshots on every call;
//! nothing is carried between decisions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The next move for the claw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Right,
    Left,
    Pick,
    Place,
    /// The claw holds a box that no stack can legally accept.
    Warning,
    Finished,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Right,
        Action::Left,
        Action::Pick,
        Action::Place,
        Action::Warning,
        Action::Finished,
    ];

    /// Stable wire token (`RIGHT`, `LEFT`, ...).
    pub fn token(self) -> &'static str {
        match self {
            Action::Right => "RIGHT",
            Action::Left => "LEFT",
            Action::Pick => "PICK",
            Action::Place => "PLACE",
            Action::Warning => "WARNING",
            Action::Finished => "FINISHED",
        }
    }

    /// True for actions that end a leveling run instead of moving the rig.
    pub fn is_terminal(self) -> bool {
        matches!(self, Action::Warning | Action::Finished)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A validated view of the rig: claw position, boxes per stack, held box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub claw_position: usize,
    pub stacks: Vec<u32>,
    pub holding: bool,
}

impl Snapshot {
    /// Boxes on the stacks plus the one in the claw, if any.
    pub fn total_boxes(&self) -> u64 {
        let stacked: u64 = self.stacks.iter().map(|&amount| u64::from(amount)).sum();
        stacked + u64::from(self.holding)
    }
}
