use crate::fraction::FractionError;

/// Reads a whole signed integer, ignoring surrounding whitespace.
pub fn parse_integer(text: &str, what: &str) -> Result<i64, FractionError> {
  let text = text.trim();
  text.parse::<i64>().map_err(|_| {
    FractionError::InvalidFormat(format!("The {} must be an integer, got '{}'", what, text))
  })
}

/// Turns a 1-based index typed by the user into a 0-based one below `length`.
pub fn parse_index(text: &str, length: usize) -> Result<usize, FractionError> {
  let text = text.trim();
  let index = text.parse::<i64>().map_err(|_| {
    FractionError::InvalidSelection(format!("The index must be an integer, got '{}'", text))
  })?;
  if index < 1 || index as u64 > length as u64 {
    return Err(FractionError::InvalidSelection(format!(
      "Invalid index {}, expected 1-{}",
      index, length
    )));
  }
  Ok(index as usize - 1)
}

pub fn is_affirmative(text: &str) -> bool {
  text.trim().eq_ignore_ascii_case("y")
}
