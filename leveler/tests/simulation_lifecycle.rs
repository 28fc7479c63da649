//! Closed-loop tests: decisions applied to a simulated rig until it stops.
//!
//! Each test drives `run_simulation` end to end and checks the final layout,
//! the stop reason and that no box is created or lost along the way.

use leveler::core::limits::Limits;
use leveler::core::rig::Rig;
use leveler::core::types::Action;
use leveler::simulate::{SimulationStop, run_simulation};
use leveler::test_support::{decide_rig, empty_claw, holding_box, misplaced_boxes};

/// Full run over eight stacks: two boxes travel to the leftmost stacks.
#[test]
fn eight_stacks_level_to_the_left() {
    let mut rig = empty_claw(7, &[0, 1, 0, 1, 0, 1, 0, 1]);
    let total = rig.total_boxes();
    let mut totals = Vec::new();

    let outcome = run_simulation(&mut rig, &Limits::default(), 100, |record| {
        totals.push(record.stacks.iter().sum::<i64>() + i64::from(record.holding));
    })
    .expect("simulate");

    assert_eq!(outcome.stop, SimulationStop::Finished);
    assert_eq!(outcome.decisions.len(), 18);
    assert_eq!(outcome.final_state, empty_claw(0, &[1, 1, 1, 1, 0, 0, 0, 0]));
    assert!(totals.iter().all(|&seen| seen == total));
}

/// Every non-terminal decision, replayed by hand, agrees with the loop.
#[test]
fn loop_matches_manual_replay() {
    let start = empty_claw(2, &[2, 0, 0, 2, 0]);
    let mut rig = start.clone();
    let outcome = run_simulation(&mut rig, &Limits::default(), 100, |_| {}).expect("simulate");

    let mut manual = start;
    for record in &outcome.decisions {
        let action = decide_rig(&manual).expect("decide");
        assert_eq!(action, record.action, "step {}", record.step);
        if !action.is_terminal() {
            manual.apply(action).expect("apply");
        }
    }
    assert_eq!(manual, outcome.final_state);
}

/// The held box is placed first, then the rig keeps leveling.
#[test]
fn starts_with_held_box() {
    let mut rig = holding_box(0, &[4, 2, 1, 4]);
    let outcome = run_simulation(&mut rig, &Limits::default(), 100, |_| {}).expect("simulate");

    assert_eq!(outcome.stop, SimulationStop::Finished);
    assert_eq!(outcome.final_state.stacks, vec![3, 3, 3, 3]);
    assert!(!outcome.final_state.holding);
    assert_eq!(
        outcome.decisions.first().map(|record| record.action),
        Some(Action::Right)
    );
}

/// A stack stuck at the per-stack maximum cannot receive the held box.
#[test]
fn stops_on_warning_when_capacity_is_exhausted() {
    let mut rig = holding_box(2, &[5, 4, 6]);
    let outcome = run_simulation(&mut rig, &Limits::default(), 100, |_| {}).expect("simulate");

    assert_eq!(outcome.stop, SimulationStop::Warning);
    assert_eq!(outcome.applied, 4);
    assert_eq!(outcome.final_state, holding_box(2, &[5, 5, 5]));
}

/// Already level: the first decision is FINISHED and nothing is applied.
#[test]
fn level_rig_finishes_immediately() {
    let mut rig = empty_claw(1, &[1, 1, 1, 1, 0]);
    let outcome = run_simulation(&mut rig, &Limits::default(), 100, |_| {}).expect("simulate");

    assert_eq!(outcome.applied, 0);
    assert_eq!(outcome.stop, SimulationStop::Finished);
    assert_eq!(misplaced_boxes(&outcome.final_state.stacks, false), 0);
}

/// A custom sentinel lets the tall layout finish instead of warning.
#[test]
fn higher_per_stack_sentinel_avoids_warning() {
    let mut rig = holding_box(2, &[5, 4, 6]);
    let limits = Limits {
        max_boxes_per_stack: 8,
        ..Limits::default()
    };
    let outcome = run_simulation(&mut rig, &limits, 100, |_| {}).expect("simulate");

    assert_eq!(outcome.stop, SimulationStop::Finished);
    assert_eq!(outcome.final_state, Rig::new(0, vec![6, 5, 5], false));
}
