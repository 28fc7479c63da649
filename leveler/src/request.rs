//! Untyped decision requests (JSON values from files, stdin or CLI args).
//!
//! Shape checks happen here; range checks are left to
//! [`validate_arguments`](crate::core::validate::validate_arguments).

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::core::engine::decide_snapshot;
use crate::core::error::DecisionError;
use crate::core::limits::Limits;
use crate::core::types::{Action, Snapshot};
use crate::core::validate::validate_arguments;

/// A decision request as received on the wire. Missing fields are `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecideRequest {
    pub claw_position: Value,
    pub stacks: Value,
    pub holding: Value,
}

impl DecideRequest {
    pub fn validate(&self, limits: &Limits) -> Result<Snapshot, DecisionError> {
        validate_values(&self.claw_position, &self.stacks, &self.holding, limits)
    }

    pub fn decide(&self, limits: &Limits) -> Result<Action, DecisionError> {
        decide_value(&self.claw_position, &self.stacks, &self.holding, limits)
    }
}

/// Decide the next action from untyped values.
pub fn decide_value(
    claw_position: &Value,
    stacks: &Value,
    holding: &Value,
    limits: &Limits,
) -> Result<Action, DecisionError> {
    let snapshot = validate_values(claw_position, stacks, holding, limits)?;
    Ok(decide_snapshot(&snapshot, limits))
}

/// Check the JSON shape of each argument, then run typed validation.
pub fn validate_values(
    claw_position: &Value,
    stacks: &Value,
    holding: &Value,
    limits: &Limits,
) -> Result<Snapshot, DecisionError> {
    let claw = match claw_position {
        Value::Number(number) => integer(number).ok_or_else(|| {
            DecisionError::InvalidClawPosition(format!("{} is not an integer", number))
        })?,
        other => {
            return Err(DecisionError::NonNumericInput(format!(
                "claw position must be a number, got {}",
                describe(other)
            )));
        }
    };

    let items = stacks.as_array().ok_or_else(|| {
        DecisionError::InvalidStackCollection(format!(
            "stacks must be an array, got {}",
            describe(stacks)
        ))
    })?;

    // Anything other than the integers 0 and 1 is left for typed validation to reject.
    let holding = match holding {
        Value::Number(number) => integer(number),
        _ => None,
    }
    .ok_or_else(|| {
        DecisionError::InvalidHoldingFlag(format!("got {}, expected 0 or 1", holding))
    })?;

    let mut amounts = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let amount = match item {
            Value::Number(number) => integer(number).ok_or_else(|| {
                DecisionError::InvalidBoxAmountPerStack(format!(
                    "stack {} has {} boxes, expected an integer",
                    index, number
                ))
            })?,
            other => {
                return Err(DecisionError::NonNumericInput(format!(
                    "stack {} must be a number, got {}",
                    index,
                    describe(other)
                )));
            }
        };
        amounts.push(amount);
    }

    validate_arguments(claw, &amounts, holding, limits)
}

/// Integer value of a JSON number, accepting integral floats like `2.0`.
///
/// Magnitudes beyond `i64` saturate; they fail range checks downstream.
fn integer(number: &Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }
    if number.as_u64().is_some() {
        return Some(i64::MAX);
    }
    number
        .as_f64()
        .filter(|value| value.is_finite() && value.fract() == 0.0)
        .map(|value| value as i64)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a CLI argument as JSON, falling back to a JSON string.
pub fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
