//! Shared fixtures for integration tests.

use assistant_bot::{AddressBook, Config, FixedClock, Record, Session};
use chrono::NaiveDate;

/// A Wednesday used as "today" across the tests.
pub fn wednesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
}

/// Session pinned to `today`.
#[allow(dead_code)]
pub fn session_on(today: NaiveDate) -> Session<FixedClock> {
    Session::with_clock(&Config::default(), FixedClock(today))
}

/// Build a record with the given phones and optional birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::with_name(name).unwrap();
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).unwrap();
    }
    record
}

/// Address book pre-filled with a few contacts.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("john", &["1234567890"], None));
    book.add_record(sample_record("jane", &["5555555555"], Some("24.10.1990")));
    book.add_record(sample_record("bob", &["1111111111", "2222222222"], Some("20.10.1985")));
    book
}

/// Feed `lines` to a session and collect the replies, skipping blanks.
#[allow(dead_code)]
pub fn replies(session: &mut Session<FixedClock>, lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| session.handle_line(line))
        .collect()
}
