//! Upcoming birthday calculation.
//!
//! Birthdays are greeted during the calendar week that follows the current
//! one (Monday through Sunday). Weekend birthdays are greeted on Monday.

use crate::domain::Birthday;
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;
use tracing::debug;

/// Contact names grouped by the weekday they should be greeted on.
///
/// Buckets are kept in Monday..Friday order; names within a bucket keep
/// the order in which they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingBirthdays {
    buckets: Vec<(Weekday, Vec<String>)>,
}

impl UpcomingBirthdays {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` to the bucket for `weekday`.
    pub fn push(&mut self, weekday: Weekday, name: impl Into<String>) {
        let name = name.into();
        let position = self
            .buckets
            .binary_search_by_key(&weekday.num_days_from_monday(), |(day, _)| {
                day.num_days_from_monday()
            });

        match position {
            Ok(index) => self.buckets[index].1.push(name),
            Err(index) => self.buckets.insert(index, (weekday, vec![name])),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of non-empty weekday buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Names greeted on `weekday`, if any.
    pub fn get(&self, weekday: Weekday) -> Option<&[String]> {
        self.buckets
            .iter()
            .find(|(day, _)| *day == weekday)
            .map(|(_, names)| names.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> {
        self.buckets
            .iter()
            .map(|(day, names)| (*day, names.as_slice()))
    }
}

impl fmt::Display for UpcomingBirthdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .iter()
            .map(|(day, names)| format!("{}: {}", weekday_name(day), names.join(", ")))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Full English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// The half-open `[start, end)` range of next week, Monday to Monday.
pub fn greeting_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    let next_monday = monday + Duration::days(7);
    (next_monday, next_monday + Duration::days(7))
}

/// The first observance of `birthday` on or after `today`.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.anniversary_in(today.year())?;
    if this_year < today {
        birthday.anniversary_in(today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Weekday a birthday on `date` is greeted on.
pub fn greeting_weekday(date: NaiveDate) -> Weekday {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => Weekday::Mon,
        weekday => weekday,
    }
}

/// Collect the contacts whose birthday falls in next week's window.
pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate) -> UpcomingBirthdays
where
    I: IntoIterator<Item = &'a Record>,
{
    let (start, end) = greeting_window(today);
    let mut upcoming = UpcomingBirthdays::new();

    for record in records {
        let Some(birthday) = record.birthday() else {
            continue;
        };
        let Some(date) = next_occurrence(birthday, today) else {
            continue;
        };

        if start <= date && date < end {
            let weekday = greeting_weekday(date);
            debug!(name = %record.name(), %date, ?weekday, "Birthday in greeting window");
            upcoming.push(weekday, record.name().as_str());
        }
    }

    upcoming
}
