use crate::fraction::{Fraction, FractionError};

/// The fractions entered during a session, in the order they were created.
#[derive(Debug, Clone, Default)]
pub struct State {
  fractions: Vec<Fraction>,
}

impl State {
  pub fn new() -> Self {
    Self {
      fractions: Vec::new(),
    }
  }

  pub fn store_fraction(&mut self, fraction: Fraction) {
    self.fractions.push(fraction);
  }

  pub fn recall_fraction(&self, index: usize) -> Result<Fraction, FractionError> {
    self.fractions.get(index).copied().ok_or_else(|| {
      FractionError::InvalidSelection(format!(
        "No fraction at index {} ({} stored)",
        index + 1,
        self.fractions.len()
      ))
    })
  }

  pub fn replace_fraction(&mut self, index: usize, fraction: Fraction) -> Result<(), FractionError> {
    let length = self.fractions.len();
    let slot = self.fractions.get_mut(index).ok_or_else(|| {
      FractionError::InvalidSelection(format!(
        "No fraction at index {} ({} stored)",
        index + 1,
        length
      ))
    })?;
    *slot = fraction;
    Ok(())
  }

  pub fn fractions(&self) -> &[Fraction] {
    &self.fractions
  }

  pub fn len(&self) -> usize {
    self.fractions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.fractions.is_empty()
  }
}
