use std::fmt;

use num::{CheckedAdd, CheckedMul, CheckedSub};

/// A signed rational number kept as `numerator/denominator`.
///
/// The denominator is never zero and never negative; the sign lives on the
/// numerator. Reduction to lowest terms only happens through [`Fraction::simplify`],
/// and the arithmetic methods call it on both operands before doing anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
  numerator: i64,
  denominator: i64,
}

impl Fraction {
  pub fn new(numerator: i64, denominator: i64) -> Result<Fraction, FractionError> {
    let mut fraction = Fraction::from_integer(numerator);
    fraction.set_denominator(denominator)?;
    Ok(fraction)
  }

  pub fn from_integer(numerator: i64) -> Fraction {
    Fraction {
      numerator,
      denominator: 1,
    }
  }

  pub fn numerator(&self) -> i64 {
    self.numerator
  }

  pub fn set_numerator(&mut self, numerator: i64) {
    self.numerator = numerator;
  }

  pub fn denominator(&self) -> i64 {
    self.denominator
  }

  /// Replaces the denominator, moving a negative sign onto the numerator.
  pub fn set_denominator(&mut self, denominator: i64) -> Result<(), FractionError> {
    if denominator == 0 {
      return Err(FractionError::DivisionByZero(
        "The denominator can't be 0".to_string(),
      ));
    }
    let (numerator, denominator) = normalize_sign(self.numerator, denominator)?;
    self.numerator = numerator;
    self.denominator = denominator;
    Ok(())
  }

  /// Divides both parts by their greatest common divisor, in place.
  pub fn simplify(&mut self) -> &mut Self {
    let divisor = common_divisor(self.numerator, self.denominator);
    if divisor != 1 {
      self.set_numerator(self.numerator / divisor);
      self.denominator /= divisor;
    }
    self
  }

  /// Least common multiple of both denominators. Simplifies both operands first.
  pub fn lcm(&mut self, other: &mut Fraction) -> Result<i64, FractionError> {
    self.simplify();
    other.simplify();
    let divisor = common_divisor(self.denominator, other.denominator);
    let product = CheckedMul::checked_mul(&self.denominator, &other.denominator)
      .ok_or_else(|| overflow("lcm", self, other))?;
    Ok(product / divisor)
  }

  /// Sum over the common denominator. The result is not reduced.
  pub fn add(&mut self, other: &mut Fraction) -> Result<Fraction, FractionError> {
    let (left, right, common) = self.scaled_numerators(other, "add")?;
    let numerator =
      CheckedAdd::checked_add(&left, &right).ok_or_else(|| overflow("add", self, other))?;
    Fraction::new(numerator, common)
  }

  /// Difference over the common denominator. The result is not reduced.
  pub fn subtract(&mut self, other: &mut Fraction) -> Result<Fraction, FractionError> {
    let (left, right, common) = self.scaled_numerators(other, "subtract")?;
    let numerator =
      CheckedSub::checked_sub(&left, &right).ok_or_else(|| overflow("subtract", self, other))?;
    Fraction::new(numerator, common)
  }

  pub fn multiply(&mut self, other: &mut Fraction) -> Result<Fraction, FractionError> {
    self.simplify();
    other.simplify();
    let numerator = CheckedMul::checked_mul(&self.numerator, &other.numerator)
      .ok_or_else(|| overflow("multiply", self, other))?;
    let denominator = CheckedMul::checked_mul(&self.denominator, &other.denominator)
      .ok_or_else(|| overflow("multiply", self, other))?;
    let mut product = Fraction::new(numerator, denominator)?;
    product.simplify();
    Ok(product)
  }

  pub fn divide(&mut self, other: &mut Fraction) -> Result<Fraction, FractionError> {
    self.simplify();
    other.simplify();
    if other.numerator() == 0 {
      return Err(FractionError::DivisionByZero(
        "Can't divide by a fraction with numerator 0".to_string(),
      ));
    }
    let mut reciprocal = Fraction::new(other.denominator(), other.numerator())?;
    self.multiply(&mut reciprocal)
  }

  #[cfg(test)]
  pub fn to_ratio(&self) -> num::Rational64 {
    num::Rational64::new(self.numerator, self.denominator)
  }

  // Numerators of both operands rewritten over their lcm, plus the lcm itself.
  fn scaled_numerators(
    &mut self,
    other: &mut Fraction,
    operation: &str,
  ) -> Result<(i64, i64, i64), FractionError> {
    let common = self.lcm(other)?;
    let left = CheckedMul::checked_mul(&self.numerator, &(common / self.denominator))
      .ok_or_else(|| overflow(operation, self, other))?;
    let right = CheckedMul::checked_mul(&other.numerator, &(common / other.denominator))
      .ok_or_else(|| overflow(operation, self, other))?;
    Ok((left, right, common))
  }
}

impl From<i64> for Fraction {
  fn from(numerator: i64) -> Self {
    Fraction::from_integer(numerator)
  }
}

impl fmt::Display for Fraction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.denominator == 1 {
      write!(f, "{}", self.numerator)
    } else {
      write!(f, "{}/{}", self.numerator, self.denominator)
    }
  }
}

/// Greatest common divisor by repeated remainders, over the magnitudes of `a` and `b`.
pub fn gcd(a: i64, b: i64) -> u64 {
  let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
  while b != 0 {
    (a, b) = (b, a % b);
  }
  a
}

// `b` is always a positive denominator here, so the gcd is at most `b` and fits.
fn common_divisor(a: i64, b: i64) -> i64 {
  i64::try_from(gcd(a, b)).unwrap_or(1)
}

fn normalize_sign(numerator: i64, denominator: i64) -> Result<(i64, i64), FractionError> {
  if denominator > 0 {
    return Ok((numerator, denominator));
  }
  match (numerator.checked_neg(), denominator.checked_neg()) {
    (Some(numerator), Some(denominator)) => Ok((numerator, denominator)),
    _ => Err(FractionError::Overflow(format!(
      "Can't move the sign of {}/{} onto the numerator",
      numerator, denominator
    ))),
  }
}

fn overflow(operation: &str, left: &Fraction, right: &Fraction) -> FractionError {
  FractionError::Overflow(format!(
    "Integer overflow while trying to {} {} and {}",
    operation, left, right
  ))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
  DivisionByZero(String),
  InvalidFormat(String),
  InvalidSelection(String),
  Overflow(String),
}

impl fmt::Display for FractionError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FractionError::DivisionByZero(message)
      | FractionError::InvalidFormat(message)
      | FractionError::InvalidSelection(message)
      | FractionError::Overflow(message) => write!(f, "{}", message),
    }
  }
}

impl std::error::Error for FractionError {}

#[cfg(test)]
mod tests {
  use super::*;
  use num::Rational64;

  fn fraction(numerator: i64, denominator: i64) -> Fraction {
    Fraction::new(numerator, denominator).unwrap()
  }

  #[test]
  fn displays_unreduced_parts() {
    assert_eq!(fraction(2, 4).to_string(), "2/4");
    assert_eq!(fraction(-7, 3).to_string(), "-7/3");
    assert_eq!(fraction(5, 1).to_string(), "5");
    assert_eq!(Fraction::from(9).to_string(), "9");
  }

  #[test]
  fn zero_denominator_is_rejected() {
    for numerator in [-4, 0, 1, 17] {
      assert!(matches!(
        Fraction::new(numerator, 0),
        Err(FractionError::DivisionByZero(_))
      ));
    }
  }

  #[test]
  fn set_denominator_rejects_zero_and_keeps_value() {
    let mut f = fraction(3, 4);
    assert!(matches!(
      f.set_denominator(0),
      Err(FractionError::DivisionByZero(_))
    ));
    assert_eq!(f, fraction(3, 4));
    f.set_denominator(-5).unwrap();
    assert_eq!((f.numerator(), f.denominator()), (-3, 5));
    f.set_numerator(8);
    assert_eq!(f.to_string(), "8/5");
  }

  // Negative values keep their sign on the numerator instead of being made absolute.
  #[test]
  fn sign_moves_onto_numerator() {
    let a = fraction(-3, 4);
    let b = fraction(3, -4);
    assert_eq!((a.numerator(), a.denominator()), (-3, 4));
    assert_eq!((b.numerator(), b.denominator()), (-3, 4));
    let c = fraction(-3, -4);
    assert_eq!((c.numerator(), c.denominator()), (3, 4));
  }

  #[test]
  fn minimum_denominator_overflows() {
    assert!(matches!(
      Fraction::new(1, i64::MIN),
      Err(FractionError::Overflow(_))
    ));
  }

  #[test]
  fn gcd_follows_euclid() {
    assert_eq!(gcd(12, 18), 6);
    assert_eq!(gcd(17, 5), 1);
    assert_eq!(gcd(7, 0), 7);
    assert_eq!(gcd(0, 9), 9);
    assert_eq!(gcd(0, 0), 0);
    assert_eq!(gcd(-4, 6), 2);
    assert_eq!(gcd(i64::MIN, 0), 1u64 << 63);
    assert_eq!(gcd(0, i64::MIN), 1u64 << 63);
    assert_eq!(gcd(i64::MIN, 6), 2);
    for a in 0..40i64 {
      for b in 0..40i64 {
        assert_eq!(gcd(a, b), num::integer::gcd(a, b) as u64, "gcd({}, {})", a, b);
      }
    }
  }

  #[test]
  fn simplify_reduces_and_is_idempotent() {
    let mut f = fraction(-12, 18);
    f.simplify();
    assert_eq!((f.numerator(), f.denominator()), (-2, 3));
    let once = f;
    f.simplify();
    assert_eq!(f, once);

    let mut zero = fraction(0, 5);
    assert_eq!(zero.simplify().to_string(), "0");
  }

  #[test]
  fn simplify_handles_minimum_numerator() {
    let mut f = fraction(i64::MIN, 2);
    f.simplify();
    assert_eq!((f.numerator(), f.denominator()), (i64::MIN / 2, 1));
    let mut g = Fraction::from(i64::MIN);
    assert_eq!(*g.simplify(), Fraction::from(i64::MIN));
  }

  #[test]
  fn lcm_simplifies_both_operands() {
    let mut a = fraction(2, 4);
    let mut b = fraction(3, 9);
    assert_eq!(a.lcm(&mut b).unwrap(), 6);
    assert_eq!(a, fraction(1, 2));
    assert_eq!(b, fraction(1, 3));
  }

  #[test]
  fn add_uses_common_denominator() {
    let sum = fraction(1, 2).add(&mut fraction(1, 3)).unwrap();
    assert_eq!(sum, fraction(5, 6));

    // Not reduced after the cross-multiplication.
    let sum = fraction(1, 4).add(&mut fraction(1, 4)).unwrap();
    assert_eq!(sum.to_string(), "2/4");
  }

  #[test]
  fn subtract_mirrors_add() {
    let difference = fraction(1, 2).subtract(&mut fraction(1, 3)).unwrap();
    assert_eq!(difference, fraction(1, 6));
    let difference = fraction(1, 3).subtract(&mut fraction(1, 2)).unwrap();
    assert_eq!(difference.to_string(), "-1/6");
  }

  #[test]
  fn multiply_reduces_result() {
    let product = fraction(1, 2).multiply(&mut fraction(2, 3)).unwrap();
    assert_eq!(product, fraction(1, 3));
  }

  #[test]
  fn divide_by_zero_fraction_fails() {
    assert!(matches!(
      fraction(1, 2).divide(&mut fraction(0, 5)),
      Err(FractionError::DivisionByZero(_))
    ));
  }

  #[test]
  fn divide_multiplies_by_reciprocal() {
    let quotient = fraction(1, 2).divide(&mut fraction(-3, 4)).unwrap();
    assert_eq!((quotient.numerator(), quotient.denominator()), (-2, 3));
  }

  #[test]
  fn arithmetic_agrees_with_rational64() {
    let values = [(1, 2), (-2, 3), (5, 7), (4, 6), (-9, 12), (0, 3), (8, 1)];
    for &(n1, d1) in &values {
      for &(n2, d2) in &values {
        let expected_left = Rational64::new(n1, d1);
        let expected_right = Rational64::new(n2, d2);
        let sum = fraction(n1, d1).add(&mut fraction(n2, d2)).unwrap();
        assert_eq!(sum.to_ratio(), expected_left + expected_right);
        let difference = fraction(n1, d1).subtract(&mut fraction(n2, d2)).unwrap();
        assert_eq!(difference.to_ratio(), expected_left - expected_right);
        let product = fraction(n1, d1).multiply(&mut fraction(n2, d2)).unwrap();
        assert_eq!(product.to_ratio(), expected_left * expected_right);
        if n2 != 0 {
          let quotient = fraction(n1, d1).divide(&mut fraction(n2, d2)).unwrap();
          assert_eq!(quotient.to_ratio(), expected_left / expected_right);
        }
      }
    }
  }

  #[test]
  fn overflow_is_reported() {
    let mut big = Fraction::from(i64::MAX);
    assert!(matches!(
      big.multiply(&mut Fraction::from(2)),
      Err(FractionError::Overflow(_))
    ));
    assert!(matches!(
      big.add(&mut Fraction::from(1)),
      Err(FractionError::Overflow(_))
    ));
  }
}
