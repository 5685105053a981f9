use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::{
  evaluator::{self, Outcome},
  fraction::{Fraction, FractionError},
  input,
  menu::{self, MenuChoice, Operation},
  prompt::Prompt,
  state::State,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
  CollectingInputs,
  PresentingMenu,
  Terminated,
}

/// Runs a whole session: collect fractions, then serve the operation menu.
pub fn run<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> io::Result<State> {
  let mut state = State::new();
  let mut phase = Phase::CollectingInputs;
  loop {
    phase = match phase {
      Phase::CollectingInputs => {
        collect(prompt, &mut state)?;
        list(prompt, &state)?;
        Phase::PresentingMenu
      }
      Phase::PresentingMenu => menu_step(prompt, &mut state)?,
      Phase::Terminated => break,
    };
  }
  Ok(state)
}

fn collect<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, state: &mut State) -> io::Result<()> {
  loop {
    match prompt.ask("Create another fraction? (y/n): ")? {
      Some(answer) if input::is_affirmative(&answer) => {}
      _ => return Ok(()),
    }
    let numerator = match prompt.ask_integer("Enter the numerator: ", "numerator")? {
      Some(numerator) => numerator,
      None => return Ok(()),
    };
    let denominator = match ask_denominator(prompt)? {
      Some(denominator) => denominator,
      None => return Ok(()),
    };
    match Fraction::new(numerator, denominator) {
      Ok(fraction) => {
        log::debug!("Created fraction {}", fraction);
        state.store_fraction(fraction);
      }
      Err(err) => {
        log::warn!("Rejected fraction {}/{}: {}", numerator, denominator, err);
        prompt.error(err)?;
      }
    }
  }
}

fn ask_denominator<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> io::Result<Option<i64>> {
  loop {
    match prompt.ask_integer("Enter the denominator: ", "denominator")? {
      Some(0) => {
        log::warn!("Rejected zero denominator");
        prompt.error("The denominator can't be 0.")?;
      }
      other => return Ok(other),
    }
  }
}

fn list<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, state: &State) -> io::Result<()> {
  prompt.say("\nFractions created:")?;
  if state.is_empty() {
    return prompt.say("  (none)");
  }
  for fraction in state.fractions() {
    prompt.say(format!("  - {}", fraction))?;
  }
  Ok(())
}

fn menu_step<R: BufRead, W: Write>(
  prompt: &mut Prompt<R, W>,
  state: &mut State,
) -> io::Result<Phase> {
  prompt.say(format!("\n{}", menu::render().trim_end()))?;
  let answer = match prompt.ask("Enter your option (1-6): ")? {
    Some(answer) => answer,
    None => return Ok(Phase::Terminated),
  };
  match menu::parse_choice(&answer) {
    Ok(MenuChoice::Exit) => {
      prompt.say("Exiting...")?;
      Ok(Phase::Terminated)
    }
    Ok(MenuChoice::Run(operation)) => {
      perform(prompt, state, operation)?;
      Ok(Phase::PresentingMenu)
    }
    Err(err) => {
      log::warn!("{}", err);
      prompt.say("Invalid option. Try again.")?;
      Ok(Phase::PresentingMenu)
    }
  }
}

fn perform<R: BufRead, W: Write>(
  prompt: &mut Prompt<R, W>,
  state: &mut State,
  operation: Operation,
) -> io::Result<()> {
  let left = match prompt.select_fraction(state.fractions())? {
    Some(index) => index,
    None => return Ok(()),
  };
  let right = match prompt.select_fraction(state.fractions())? {
    Some(index) => index,
    None => return Ok(()),
  };
  match evaluator::evaluate(state, operation, left, right) {
    Ok(outcome) => {
      log::debug!("{} = {}", operation, outcome);
      show(prompt, operation, outcome)
    }
    Err(FractionError::DivisionByZero(message)) => {
      log::warn!("{}", message);
      prompt.error("Can't divide by a fraction with numerator 0.")
    }
    Err(err) => {
      log::warn!("{}", err);
      prompt.error(err)
    }
  }
}

fn show<R: BufRead, W: Write>(
  prompt: &mut Prompt<R, W>,
  operation: Operation,
  outcome: Outcome,
) -> io::Result<()> {
  let result = outcome.to_string().bold();
  prompt.say(format!("{}: {}", operation.label(), result))
}
