//! In-memory model of the claw rig, used to replay decisions.

use serde::Serialize;
use thiserror::Error;

use crate::core::types::Action;

/// An action the rig cannot physically perform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RigError {
    #[error("cannot move {action} from position {position} with {stacks} stacks")]
    OutOfBounds {
        action: Action,
        position: usize,
        stacks: usize,
    },

    #[error("cannot pick at position {position}: claw already holds a box")]
    AlreadyHolding { position: usize },

    #[error("cannot pick at position {position}: stack is empty")]
    EmptyStack { position: usize },

    #[error("cannot place at position {position}: claw is empty")]
    NotHolding { position: usize },

    #[error("{0} is terminal and cannot be applied")]
    Terminal(Action),
}

/// Claw position, boxes per stack and the held box.
///
/// Values are kept in the signed, unchecked form the decision request uses so
/// the rig can be fed straight back into validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rig {
    pub claw_position: usize,
    pub stacks: Vec<i64>,
    pub holding: bool,
}

impl Rig {
    pub fn new(claw_position: usize, stacks: Vec<i64>, holding: bool) -> Self {
        Self {
            claw_position,
            stacks,
            holding,
        }
    }

    /// Boxes on the stacks plus the held box.
    pub fn total_boxes(&self) -> i64 {
        self.stacks.iter().sum::<i64>() + i64::from(self.holding)
    }

    /// Mutate the rig as the physical claw would for `action`.
    ///
    /// The rig is left unchanged when an error is returned.
    pub fn apply(&mut self, action: Action) -> Result<(), RigError> {
        let position = self.claw_position;
        let stack_amount = self.stacks.len();
        match action {
            Action::Right => {
                if position + 1 >= stack_amount {
                    return Err(out_of_bounds(action, position, stack_amount));
                }
                self.claw_position += 1;
            }
            Action::Left => {
                if position == 0 {
                    return Err(out_of_bounds(action, position, stack_amount));
                }
                self.claw_position -= 1;
            }
            Action::Pick => {
                if self.holding {
                    return Err(RigError::AlreadyHolding { position });
                }
                let stack = self
                    .stacks
                    .get_mut(position)
                    .filter(|amount| **amount > 0)
                    .ok_or(RigError::EmptyStack { position })?;
                *stack -= 1;
                self.holding = true;
            }
            Action::Place => {
                if !self.holding {
                    return Err(RigError::NotHolding { position });
                }
                let stack = self
                    .stacks
                    .get_mut(position)
                    .ok_or_else(|| out_of_bounds(action, position, stack_amount))?;
                *stack += 1;
                self.holding = false;
            }
            Action::Warning | Action::Finished => return Err(RigError::Terminal(action)),
        }
        Ok(())
    }
}

fn out_of_bounds(action: Action, position: usize, stacks: usize) -> RigError {
    RigError::OutOfBounds {
        action,
        position,
        stacks,
    }
}
