//! Command handlers.
//!
//! Every handler has the same shape: it takes the address book and returns
//! the reply text or an `AssistantError`. None of them write output.

use super::Command;
use crate::clock::Clock;
use crate::error::{AssistantError, CommandResult};
use crate::models::Record;
use crate::repositories::AddressBook;
use tracing::{debug, info};

/// Reply to the `help` command.
pub const HELP_TEXT: &str = "\
Available commands:
  hello
  add <name> <phone>
  change <name> <phone>
  phone <name>
  all
  add-birthday <name> <DD.MM.YYYY>
  show-birthday <name>
  birthdays
  delete <name>
  edit-phone <name> <old phone> <new phone>
  remove-phone <name> <phone>
  help
  close | exit";

/// Run `command` against `book`.
pub fn execute(
    command: Command,
    book: &mut AddressBook,
    clock: &dyn Clock,
) -> CommandResult<String> {
    debug!(?command, "Executing command");

    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add { name, phone } => add_contact(book, &name, &phone),
        Command::Change { name, phone } => change_contact(book, &name, &phone),
        Command::Phone { name } => show_phone(book, &name),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday { name, birthday } => add_birthday(book, &name, &birthday),
        Command::ShowBirthday { name } => show_birthday(book, &name),
        Command::Birthdays => Ok(birthdays(book, clock)),
        Command::Delete { name } => delete_contact(book, &name),
        Command::EditPhone { name, old, new } => edit_phone(book, &name, &old, &new),
        Command::RemovePhone { name, phone } => remove_phone(book, &name, &phone),
        Command::Help => Ok(HELP_TEXT.to_string()),
        Command::Exit => Ok("Good bye!".to_string()),
    }
}

fn record_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| AssistantError::UnknownName(name.to_string()))
}

fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    let mut record = Record::with_name(name)?;
    record.add_phone(phone)?;

    if book.add_record(record).is_some() {
        info!(name, "Replaced existing contact");
    } else {
        info!(name, "Added contact");
    }

    Ok("Contact added.".to_string())
}

fn change_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    record_mut(book, name)?.replace_phones(phone)?;
    info!(name, "Updated contact phones");
    Ok("Contact updated".to_string())
}

fn show_phone(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = book
        .find(name)
        .ok_or_else(|| AssistantError::UnknownName(name.to_string()))?;

    record
        .phones()
        .first()
        .map(|phone| phone.as_str().to_string())
        .ok_or_else(|| AssistantError::PhoneNotFound(name.to_string()))
}

fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts saved.".to_string();
    }

    book.records()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_birthday(book: &mut AddressBook, name: &str, birthday: &str) -> CommandResult<String> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| AssistantError::ContactNotFound(name.to_string()))?;

    record.add_birthday(birthday)?;
    info!(name, "Set birthday");
    Ok("Birthday added.".to_string())
}

fn show_birthday(book: &AddressBook, name: &str) -> CommandResult<String> {
    book.find(name)
        .and_then(Record::birthday)
        .map(|birthday| format!("{}'s birthday: {}", name, birthday))
        .ok_or_else(|| AssistantError::BirthdayNotFound(name.to_string()))
}

fn birthdays(book: &AddressBook, clock: &dyn Clock) -> String {
    let upcoming = book.get_upcoming_birthdays(clock.today());

    if upcoming.is_empty() {
        "No birthdays coming up this week".to_string()
    } else {
        format!("Birthdays coming up this week:\n{}", upcoming)
    }
}

fn delete_contact(book: &mut AddressBook, name: &str) -> CommandResult<String> {
    book.delete(name)
        .ok_or_else(|| AssistantError::UnknownName(name.to_string()))?;
    info!(name, "Deleted contact");
    Ok("Contact deleted.".to_string())
}

fn edit_phone(book: &mut AddressBook, name: &str, old: &str, new: &str) -> CommandResult<String> {
    if !record_mut(book, name)?.edit_phone(old, new)? {
        return Err(AssistantError::PhoneNotFound(name.to_string()));
    }
    info!(name, "Edited phone");
    Ok("Phone updated.".to_string())
}

fn remove_phone(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    record_mut(book, name)?.remove_phone(phone);
    info!(name, "Removed phone");
    Ok("Phone removed.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::ValidationError;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        // Wednesday
        FixedClock(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap())
    }

    fn run(book: &mut AddressBook, line: &str) -> CommandResult<String> {
        let command = Command::parse(line)?.expect("non-blank line");
        execute(command, book, &clock())
    }

    #[test]
    fn test_add_and_phone() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "add john 1234567890").unwrap(), "Contact added.");
        assert_eq!(run(&mut book, "phone john").unwrap(), "1234567890");
    }

    #[test]
    fn test_add_invalid_phone() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, "add john 123"),
            Err(AssistantError::Validation(ValidationError::InvalidPhone(
                "123".to_string()
            )))
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_change_replaces_phones() {
        let mut book = AddressBook::new();
        run(&mut book, "add john 1234567890").unwrap();
        book.find_mut("john").unwrap().add_phone("1111111111").unwrap();

        assert_eq!(run(&mut book, "change john 0987654321").unwrap(), "Contact updated");
        assert_eq!(book.find("john").unwrap().phones().len(), 1);
        assert_eq!(run(&mut book, "phone john").unwrap(), "0987654321");
    }

    #[test]
    fn test_change_unknown_contact() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, "change ghost 0987654321"),
            Err(AssistantError::UnknownName("ghost".to_string()))
        );
    }

    #[test]
    fn test_phone_without_numbers() {
        let mut book = AddressBook::new();
        run(&mut book, "add john 1234567890").unwrap();
        run(&mut book, "remove-phone john 1234567890").unwrap();

        assert_eq!(
            run(&mut book, "phone john"),
            Err(AssistantError::PhoneNotFound("john".to_string()))
        );
    }

    #[test]
    fn test_show_all() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "all").unwrap(), "No contacts saved.");

        run(&mut book, "add john 1234567890").unwrap();
        run(&mut book, "add jane 5555555555").unwrap();
        assert_eq!(
            run(&mut book, "all").unwrap(),
            "Contact name: john, phones: 1234567890\nContact name: jane, phones: 5555555555"
        );
    }

    #[test]
    fn test_birthday_commands() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, "add-birthday jane 15.03.1990"),
            Err(AssistantError::ContactNotFound("jane".to_string()))
        );

        run(&mut book, "add jane 5555555555").unwrap();
        assert_eq!(
            run(&mut book, "show-birthday jane"),
            Err(AssistantError::BirthdayNotFound("jane".to_string()))
        );
        assert_eq!(
            run(&mut book, "add-birthday jane 15.03.1990").unwrap(),
            "Birthday added."
        );
        assert_eq!(
            run(&mut book, "show-birthday jane").unwrap(),
            "jane's birthday: 15.03.1990"
        );
        assert!(matches!(
            run(&mut book, "add-birthday jane 1990-03-15"),
            Err(AssistantError::Validation(ValidationError::InvalidBirthday(_)))
        ));
    }

    #[test]
    fn test_birthdays_report() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, "birthdays").unwrap(),
            "No birthdays coming up this week"
        );

        run(&mut book, "add jane 5555555555").unwrap();
        run(&mut book, "add-birthday jane 24.10.1990").unwrap();
        run(&mut book, "add bob 1111111111").unwrap();
        run(&mut book, "add-birthday bob 22.10.1980").unwrap();

        assert_eq!(
            run(&mut book, "birthdays").unwrap(),
            "Birthdays coming up this week:\nMonday: jane\nThursday: bob"
        );
    }

    #[test]
    fn test_delete_contact() {
        let mut book = AddressBook::new();
        run(&mut book, "add john 1234567890").unwrap();

        assert_eq!(run(&mut book, "delete john").unwrap(), "Contact deleted.");
        assert_eq!(
            run(&mut book, "delete john"),
            Err(AssistantError::UnknownName("john".to_string()))
        );
    }

    #[test]
    fn test_edit_phone() {
        let mut book = AddressBook::new();
        run(&mut book, "add john 1234567890").unwrap();

        assert_eq!(
            run(&mut book, "edit-phone john 1234567890 2222222222").unwrap(),
            "Phone updated."
        );
        assert_eq!(run(&mut book, "phone john").unwrap(), "2222222222");
        assert_eq!(
            run(&mut book, "edit-phone john 1234567890 3333333333"),
            Err(AssistantError::PhoneNotFound("john".to_string()))
        );
        assert!(matches!(
            run(&mut book, "edit-phone john 2222222222 bad"),
            Err(AssistantError::Validation(_))
        ));
    }

    #[test]
    fn test_remove_phone_is_idempotent() {
        let mut book = AddressBook::new();
        run(&mut book, "add john 1234567890").unwrap();

        assert_eq!(run(&mut book, "remove-phone john 1234567890").unwrap(), "Phone removed.");
        assert_eq!(run(&mut book, "remove-phone john 1234567890").unwrap(), "Phone removed.");
        assert!(book.find("john").unwrap().phones().is_empty());
    }

    #[test]
    fn test_help_lists_commands() {
        let mut book = AddressBook::new();
        let help = run(&mut book, "help").unwrap();
        assert!(help.contains("add-birthday <name> <DD.MM.YYYY>"));
        assert!(help.contains("close | exit"));
    }
}
