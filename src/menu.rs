use crate::fraction::FractionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  Add,
  Subtract,
  Multiply,
  Divide,
  Lcm,
}

impl Operation {
  /// Prefix printed in front of the result.
  pub fn label(&self) -> &'static str {
    match self {
      Operation::Add => "Sum",
      Operation::Subtract => "Difference",
      Operation::Multiply => "Product",
      Operation::Divide => "Quotient",
      Operation::Lcm => "LCM",
    }
  }
}

impl std::fmt::Display for Operation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Operation::Add => write!(f, "Add"),
      Operation::Subtract => write!(f, "Subtract"),
      Operation::Multiply => write!(f, "Multiply"),
      Operation::Divide => write!(f, "Divide"),
      Operation::Lcm => write!(f, "Compute LCM"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
  Run(Operation),
  Exit,
}

impl std::fmt::Display for MenuChoice {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MenuChoice::Run(operation) => write!(f, "{}", operation),
      MenuChoice::Exit => write!(f, "Exit"),
    }
  }
}

pub const CHOICES: [MenuChoice; 6] = [
  MenuChoice::Run(Operation::Add),
  MenuChoice::Run(Operation::Subtract),
  MenuChoice::Run(Operation::Multiply),
  MenuChoice::Run(Operation::Divide),
  MenuChoice::Run(Operation::Lcm),
  MenuChoice::Exit,
];

pub fn render() -> String {
  let mut menu = "Select an operation:\n".to_string();
  for (index, choice) in CHOICES.iter().enumerate() {
    menu.push_str(&format!("{}. {}\n", index + 1, choice));
  }
  menu
}

pub fn parse_choice(text: &str) -> Result<MenuChoice, FractionError> {
  let text = text.trim();
  match text {
    "1" => Ok(CHOICES[0]),
    "2" => Ok(CHOICES[1]),
    "3" => Ok(CHOICES[2]),
    "4" => Ok(CHOICES[3]),
    "5" => Ok(CHOICES[4]),
    "6" => Ok(CHOICES[5]),
    _ => Err(FractionError::InvalidSelection(format!(
      "Invalid option '{}'",
      text
    ))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn menu_lists_every_choice_in_order() {
    let menu = render();
    let lines: Vec<&str> = menu.lines().collect();
    assert_eq!(lines[0], "Select an operation:");
    assert_eq!(lines[1], "1. Add");
    assert_eq!(lines[5], "5. Compute LCM");
    assert_eq!(lines[6], "6. Exit");
    assert_eq!(lines.len(), 7);
  }

  #[test]
  fn parses_options() {
    assert_eq!(parse_choice("1"), Ok(MenuChoice::Run(Operation::Add)));
    assert_eq!(parse_choice(" 4\n"), Ok(MenuChoice::Run(Operation::Divide)));
    assert_eq!(parse_choice("6"), Ok(MenuChoice::Exit));
    for text in ["0", "7", "add", "", "1.0"] {
      assert!(matches!(
        parse_choice(text),
        Err(FractionError::InvalidSelection(_))
      ));
    }
  }
}
