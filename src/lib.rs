//! Assistant Bot - an interactive command-line address book.
//!
//! Contacts live in memory for the length of one session. Each contact has a
//! name, any number of ten-digit phone numbers, and an optional birthday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact record
//! - **repositories**: The keyed address book store
//! - **services**: Upcoming birthday calculation
//! - **commands**: Input parsing and command handlers
//! - **session**: The read-eval-print loop and its state
//! - **error**: Error types and their user-facing messages
//! - **config**: Configuration from environment variables
//! - **clock**: Source of today's date

pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::Command;
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{AssistantError, CommandResult, ConfigError};
pub use models::Record;
pub use repositories::AddressBook;
pub use services::UpcomingBirthdays;
pub use session::{Session, SessionState};
