use std::fmt;

use crate::{
  fraction::{Fraction, FractionError},
  menu::Operation,
  state::State,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Value(Fraction),
  Multiple(i64),
}

impl fmt::Display for Outcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Outcome::Value(fraction) => write!(f, "{}", fraction),
      Outcome::Multiple(multiple) => write!(f, "{}", multiple),
    }
  }
}

/// Applies `operation` to the stored fractions at `left` and `right`.
///
/// The operations simplify their operands in place, so both entries are written
/// back in reduced form, even when the operation itself fails. Both indices
/// may point at the same entry.
pub fn evaluate(
  state: &mut State,
  operation: Operation,
  left: usize,
  right: usize,
) -> Result<Outcome, FractionError> {
  let mut left_value = state.recall_fraction(left)?;
  let mut right_value = state.recall_fraction(right)?;
  log::debug!(
    "{} with operands {} (#{}) and {} (#{})",
    operation,
    left_value,
    left + 1,
    right_value,
    right + 1
  );

  let outcome = evaluate_pair(operation, &mut left_value, &mut right_value);

  state.replace_fraction(left, left_value)?;
  state.replace_fraction(right, right_value)?;
  outcome
}

fn evaluate_pair(
  operation: Operation,
  left: &mut Fraction,
  right: &mut Fraction,
) -> Result<Outcome, FractionError> {
  Ok(match operation {
    Operation::Add => Outcome::Value(left.add(right)?),
    Operation::Subtract => Outcome::Value(left.subtract(right)?),
    Operation::Multiply => Outcome::Value(left.multiply(right)?),
    Operation::Divide => Outcome::Value(left.divide(right)?),
    Operation::Lcm => Outcome::Multiple(left.lcm(right)?),
  })
}
