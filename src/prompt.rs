use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::{fraction::Fraction, input};

/// Line-oriented conversation with the user over any reader/writer pair.
///
/// Every `ask*` method returns `Ok(None)` once the input is exhausted.
pub struct Prompt<R, W> {
  reader: R,
  writer: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
  pub fn new(reader: R, writer: W) -> Self {
    Self { reader, writer }
  }

  pub fn say(&mut self, line: impl std::fmt::Display) -> io::Result<()> {
    writeln!(self.writer, "{}", line)
  }

  pub fn error(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
    let line = format!("Error: {}", message);
    writeln!(self.writer, "{}", line.red())
  }

  pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
    write!(self.writer, "{}", question)?;
    self.writer.flush()?;
    let mut line = String::new();
    if self.reader.read_line(&mut line)? == 0 {
      log::debug!("Input closed while waiting for: {}", question.trim());
      return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
  }

  /// Asks until the answer parses as an integer.
  pub fn ask_integer(&mut self, question: &str, what: &str) -> io::Result<Option<i64>> {
    loop {
      let answer = match self.ask(question)? {
        Some(answer) => answer,
        None => return Ok(None),
      };
      match input::parse_integer(&answer, what) {
        Ok(value) => return Ok(Some(value)),
        Err(err) => {
          log::warn!("{}", err);
          self.error(err)?;
        }
      }
    }
  }

  /// Lists `fractions` and asks for a 1-based position until a valid one is given.
  ///
  /// Returns the 0-based index of the chosen fraction.
  pub fn select_fraction(&mut self, fractions: &[Fraction]) -> io::Result<Option<usize>> {
    if fractions.is_empty() {
      self.say("No fractions available.")?;
      return Ok(None);
    }
    for (index, fraction) in fractions.iter().enumerate() {
      self.say(format!("{}. {}", index + 1, fraction))?;
    }
    let question = format!("Enter the index of the fraction (1-{}): ", fractions.len());
    loop {
      let answer = match self.ask(&question)? {
        Some(answer) => answer,
        None => return Ok(None),
      };
      match input::parse_index(&answer, fractions.len()) {
        Ok(index) => return Ok(Some(index)),
        Err(err) => {
          log::warn!("{}", err);
          self.error(format!("{}. Try again.", err))?;
        }
      }
    }
  }

  #[cfg(test)]
  pub fn into_writer(self) -> W {
    self.writer
  }
}
