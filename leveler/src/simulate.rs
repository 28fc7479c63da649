//! Closed-loop replay: decide, apply to an actuator, repeat.
//!
//! The decision core is stateless; this loop owns sequencing and makes sure
//! each decision sees the state produced by the previous action.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::engine::decide_with_limits;
use crate::core::limits::Limits;
use crate::core::rig::Rig;
use crate::core::types::Action;

/// Something that can report the rig state and carry out actions.
pub trait Actuator {
    fn observe(&self) -> Rig;
    fn apply(&mut self, action: Action) -> Result<()>;
}

impl Actuator for Rig {
    fn observe(&self) -> Rig {
        self.clone()
    }

    fn apply(&mut self, action: Action) -> Result<()> {
        Rig::apply(self, action)?;
        Ok(())
    }
}

/// One decision and the state it was made from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// 1-indexed decision number.
    pub step: u32,
    pub claw_position: usize,
    pub stacks: Vec<i64>,
    pub holding: bool,
    pub action: Action,
}

/// Reason why `run_simulation` stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum SimulationStop {
    Finished,
    /// The claw holds a box no stack can accept.
    Warning,
    /// `max_steps` actions were applied without reaching a terminal decision.
    StepLimit { max_steps: u32 },
}

/// Summary of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationOutcome {
    pub decisions: Vec<StepRecord>,
    /// Actions actually carried out (terminal decisions are not applied).
    pub applied: u32,
    pub stop: SimulationStop,
    pub final_state: Rig,
}

/// Decide and apply until the engine reports FINISHED or WARNING, or until
/// `max_steps` actions have been applied.
///
/// Validation and actuator errors stop the run immediately.
pub fn run_simulation<A: Actuator, F: FnMut(&StepRecord)>(
    actuator: &mut A,
    limits: &Limits,
    max_steps: u32,
    mut on_step: F,
) -> Result<SimulationOutcome> {
    let mut decisions = Vec::new();
    let mut applied = 0u32;

    let stop = loop {
        let state = actuator.observe();
        let step = applied + 1;
        let claw = i64::try_from(state.claw_position).unwrap_or(i64::MAX);
        let action = decide_with_limits(claw, &state.stacks, i64::from(state.holding), limits)
            .with_context(|| format!("decide step {}", step))?;
        debug!(
            step,
            claw = state.claw_position,
            stacks = ?state.stacks,
            holding = state.holding,
            %action,
            "decided"
        );

        let record = StepRecord {
            step,
            claw_position: state.claw_position,
            stacks: state.stacks,
            holding: state.holding,
            action,
        };
        on_step(&record);
        decisions.push(record);

        if action.is_terminal() {
            break match action {
                Action::Finished => SimulationStop::Finished,
                _ => SimulationStop::Warning,
            };
        }
        if applied >= max_steps {
            break SimulationStop::StepLimit { max_steps };
        }

        actuator
            .apply(action)
            .with_context(|| format!("apply {} at step {}", action, step))?;
        applied += 1;
    };

    info!(applied, stop = ?stop, "simulation stopped");
    Ok(SimulationOutcome {
        decisions,
        applied,
        stop,
        final_state: actuator.observe(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::DecisionError;

    fn actions(outcome: &SimulationOutcome) -> Vec<Action> {
        outcome.decisions.iter().map(|record| record.action).collect()
    }

    #[test]
    fn replays_reference_sequence_to_finished() {
        let mut rig = Rig::new(1, vec![3, 2, 1, 4], true);
        let outcome = run_simulation(&mut rig, &Limits::default(), 100, |_| {}).expect("simulate");
        assert_eq!(
            actions(&outcome),
            vec![
                Action::Place,
                Action::Right,
                Action::Right,
                Action::Pick,
                Action::Left,
                Action::Place,
                Action::Right,
                Action::Pick,
                Action::Left,
                Action::Place,
                Action::Finished,
            ]
        );
        assert_eq!(outcome.stop, SimulationStop::Finished);
        assert_eq!(outcome.applied, 10);
        assert_eq!(outcome.final_state, Rig::new(2, vec![3, 3, 3, 2], false));
    }

    #[test]
    fn stops_on_warning_without_applying_it() {
        let mut rig = Rig::new(2, vec![5, 5, 5], true);
        let outcome = run_simulation(&mut rig, &Limits::default(), 10, |_| {}).expect("simulate");
        assert_eq!(outcome.stop, SimulationStop::Warning);
        assert_eq!(outcome.applied, 0);
        assert_eq!(outcome.final_state, Rig::new(2, vec![5, 5, 5], true));
    }

    #[test]
    fn stops_at_step_limit() {
        let mut rig = Rig::new(0, vec![4, 2, 1, 4], true);
        let mut seen = Vec::new();
        let outcome = run_simulation(&mut rig, &Limits::default(), 2, |record| {
            seen.push(record.step);
        })
        .expect("simulate");
        assert_eq!(outcome.stop, SimulationStop::StepLimit { max_steps: 2 });
        assert_eq!(outcome.applied, 2);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn picking_the_only_box_fails_validation_next_step() {
        // One box: it belongs on stack 0, so it is picked from stack 1. The next
        // request has no stacked boxes, which the total-box bound rejects.
        let mut rig = Rig::new(1, vec![0, 1], false);
        let err = run_simulation(&mut rig, &Limits::default(), 10, |_| {}).expect_err("invalid");
        let decision = err
            .downcast_ref::<DecisionError>()
            .expect("decision error");
        assert!(matches!(decision, DecisionError::InvalidTotalBoxCount(_)));
        assert_eq!(rig, Rig::new(1, vec![0, 0], true));
    }
}
