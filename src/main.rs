use std::io;

use crate::prompt::Prompt;

mod driver;
mod evaluator;
mod fraction;
mod input;
mod menu;
mod prompt;
mod state;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  env_logger::init();
  let stdin = io::stdin();
  let mut prompt = Prompt::new(stdin.lock(), io::stdout());
  let state = driver::run(&mut prompt)?;
  log::debug!("Session ended with {} fractions", state.len());
  Ok(())
}
