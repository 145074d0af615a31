//! Interactive session loop.
//!
//! The session owns the address book, reads one line at a time, and is the
//! only place replies are written. It stays `Running` until `close`/`exit`
//! or end of input.

use crate::clock::{Clock, SystemClock};
use crate::commands::{execute, Command};
use crate::config::Config;
use crate::repositories::AddressBook;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Printed once when the session starts.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// One interactive session over an in-memory address book.
pub struct Session<C: Clock = SystemClock> {
    book: AddressBook,
    clock: C,
    prompt: String,
    state: SessionState,
}

impl Session<SystemClock> {
    /// Create a session using the system date.
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    /// Create a session with a custom clock.
    pub fn with_clock(config: &Config, clock: C) -> Self {
        Self {
            book: AddressBook::new(),
            clock,
            prompt: config.prompt.clone(),
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one input line and return the reply, if any.
    ///
    /// Blank lines produce no reply. Errors are turned into their message
    /// here; nothing a command does can end the session except `close`/`exit`.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        if self.state == SessionState::Terminated {
            return None;
        }

        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return None,
            Err(e) => {
                debug!(error = ?e, "Rejected input");
                return Some(e.to_string());
            }
        };

        if command.is_exit() {
            info!("Session terminated by user");
            self.state = SessionState::Terminated;
        }

        match execute(command, &mut self.book, &self.clock) {
            Ok(reply) => Some(reply),
            Err(e) => {
                debug!(error = ?e, "Command failed");
                Some(e.to_string())
            }
        }
    }

    /// Drive the session until it terminates or input runs out.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        info!("Session started");
        writeln!(output, "{}", WELCOME)?;

        let mut buf = Vec::new();
        while self.state == SessionState::Running {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            buf.clear();
            let read = match input.read_until(b'\n', &mut buf) {
                Ok(read) => read,
                Err(e) => {
                    self.state = SessionState::Terminated;
                    return Err(e);
                }
            };
            if read == 0 {
                info!("Input closed, ending session");
                self.state = SessionState::Terminated;
                writeln!(output)?;
                break;
            }

            // Bytes that are not UTF-8 become U+FFFD and go through normal parsing.
            let line = String::from_utf8_lossy(&buf);
            if let Some(reply) = self.handle_line(&line) {
                writeln!(output, "{}", reply)?;
            }
        }

        info!(contacts = self.book.len(), "Session finished");
        Ok(())
    }
}
