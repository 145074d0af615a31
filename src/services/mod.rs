//! Application service layer.
//!
//! Services hold the calculations that sit on top of the record store.

pub mod birthday_service;

pub use birthday_service::{upcoming_birthdays, weekday_name, UpcomingBirthdays};
