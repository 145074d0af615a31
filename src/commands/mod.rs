//! Command parsing.
//!
//! A line is split on whitespace. The first token, lowercased, selects the
//! command; the rest are positional arguments taken verbatim. Commands with
//! arguments require the exact count, commands without ignore extra tokens.

pub mod handlers;

use crate::error::{AssistantError, CommandResult};

pub use handlers::{execute, HELP_TEXT};

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    EditPhone { name: String, old: String, new: String },
    RemovePhone { name: String, phone: String },
    Help,
    Exit,
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for blank lines.
    ///
    /// # Errors
    ///
    /// `InvalidCommand` for an unknown command token, `MissingArguments`
    /// when the argument count is wrong.
    pub fn parse(line: &str) -> CommandResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(token) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match token.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => {
                let [name, phone] = expect_args(&args)?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, phone] = expect_args(&args)?;
                Command::Change { name, phone }
            }
            "phone" => {
                let [name] = expect_args(&args)?;
                Command::Phone { name }
            }
            "all" => Command::All,
            "add-birthday" => {
                let [name, birthday] = expect_args(&args)?;
                Command::AddBirthday { name, birthday }
            }
            "show-birthday" => {
                let [name] = expect_args(&args)?;
                Command::ShowBirthday { name }
            }
            "birthdays" => Command::Birthdays,
            "delete" => {
                let [name] = expect_args(&args)?;
                Command::Delete { name }
            }
            "edit-phone" => {
                let [name, old, new] = expect_args(&args)?;
                Command::EditPhone { name, old, new }
            }
            "remove-phone" => {
                let [name, phone] = expect_args(&args)?;
                Command::RemovePhone { name, phone }
            }
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            other => return Err(AssistantError::InvalidCommand(other.to_string())),
        };

        Ok(Some(command))
    }

    /// Whether this command ends the session.
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }
}

fn expect_args<const N: usize>(args: &[&str]) -> CommandResult<[String; N]> {
    let args: [&str; N] = args
        .try_into()
        .map_err(|_| AssistantError::MissingArguments)?;
    Ok(args.map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   \t "), Ok(None));
    }

    #[test]
    fn test_parse_command_is_case_insensitive() {
        assert_eq!(Command::parse("HeLLo"), Ok(Some(Command::Hello)));
        assert_eq!(Command::parse("  EXIT  "), Ok(Some(Command::Exit)));
        assert_eq!(Command::parse("close"), Ok(Some(Command::Exit)));
    }

    #[test]
    fn test_parse_arguments_verbatim() {
        assert_eq!(
            Command::parse("ADD John 1234567890"),
            Ok(Some(Command::Add {
                name: "John".to_string(),
                phone: "1234567890".to_string(),
            }))
        );
    }

    #[test]
    fn test_parse_wrong_argument_count() {
        assert_eq!(Command::parse("add john"), Err(AssistantError::MissingArguments));
        assert_eq!(
            Command::parse("add john 1234567890 extra"),
            Err(AssistantError::MissingArguments)
        );
        assert_eq!(Command::parse("phone"), Err(AssistantError::MissingArguments));
        assert_eq!(
            Command::parse("edit-phone john 1111111111"),
            Err(AssistantError::MissingArguments)
        );
    }

    #[test]
    fn test_parse_zero_arg_commands_ignore_extras() {
        assert_eq!(Command::parse("all please"), Ok(Some(Command::All)));
        assert_eq!(Command::parse("birthdays now"), Ok(Some(Command::Birthdays)));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            Command::parse("fly away"),
            Err(AssistantError::InvalidCommand("fly".to_string()))
        );
    }

    #[test]
    fn test_parse_edit_phone() {
        assert_eq!(
            Command::parse("edit-phone john 1111111111 2222222222"),
            Ok(Some(Command::EditPhone {
                name: "john".to_string(),
                old: "1111111111".to_string(),
                new: "2222222222".to_string(),
            }))
        );
    }

    #[test]
    fn test_is_exit() {
        assert!(Command::Exit.is_exit());
        assert!(!Command::Hello.is_exit());
    }
}
