//! Interactive command shell
//!
//! Reads one command per line, runs it against the in-memory address book,
//! and prints the reply. The book is saved once, when the shell exits.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::commands::{self, Command, Reply, INVALID_COMMAND};
use crate::config::Settings;
use crate::error::ContactsResult;
use crate::models::{AddressBook, Record};
use crate::storage::Storage;

const WELCOME: &str = "Welcome to the assistant bot! Here are the commands:
  - hello: Get a greeting.
  - add [name] [phone]: Add or update a contact.
  - change [name] [new phone]: Change phone number.
  - show <name>: Show details of a contact
  - phone <name>: Calling a contact
  - all: Show all contacts
  - add-birthday [name] [birthday]: Add birthday.
  - show-birthday [name]: Show birthday.
  - birthdays: Show upcoming birthdays.
  - close or exit: Close the program.";

const FAREWELL: &str = "Good bye!";

/// The read-eval-print loop around an address book
pub struct Shell<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
    book: AddressBook,
    /// Fixed date for `birthdays`; the local clock when unset
    today: Option<NaiveDate>,
}

impl<'a> Shell<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, book: AddressBook) -> Self {
        Self {
            storage,
            settings,
            book,
            today: None,
        }
    }

    /// Pin "today" instead of reading the clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Run until `close`/`exit` or end of input, then save the book
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> ContactsResult<()> {
        writeln!(output, "{}", WELCOME)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", self.settings.prompt)?;
            output.flush()?;

            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    // End of input behaves like `exit`
                    writeln!(output)?;
                    break;
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(error = %err, "Could not read input, closing the shell");
                    writeln!(output)?;
                    break;
                }
            }

            // Undecodable bytes become U+FFFD and go through normal dispatch
            let line = String::from_utf8_lossy(&buf);
            match self.handle_line(&line) {
                Some(Reply::Message(message)) if !message.is_empty() => {
                    writeln!(output, "{}", message)?
                }
                Some(Reply::Message(_)) | None => {}
                Some(Reply::Exit) => break,
            }
        }

        self.storage.save(&self.book)?;
        writeln!(output, "{}", FAREWELL)?;
        Ok(())
    }

    /// Run one input line; blank lines produce no reply
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let input = commands::parse_input(line)?;

        let Some(command) = Command::parse(input.word) else {
            debug!(word = input.word, "Unrecognized command");
            return Some(Reply::Message(INVALID_COMMAND.to_string()));
        };

        let subject = input
            .args
            .first()
            .filter(|_| command.is_mutating())
            .map(|name| name.to_string());
        let before = subject
            .as_deref()
            .and_then(|name| self.book.find(name))
            .cloned();

        let today = self.today();
        let reply = commands::execute(
            command,
            &input.args,
            &mut self.book,
            today,
            self.settings.birthday_window_days,
        );

        if let Some(name) = subject {
            self.audit_change(before.as_ref(), self.book.find(&name));
        }

        Some(reply)
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn audit_change(&self, before: Option<&Record>, after: Option<&Record>) {
        let result = match (before, after) {
            (None, Some(after)) => self.storage.log_create(after),
            (Some(before), Some(after)) if before != after => {
                self.storage.log_update(before, after)
            }
            _ => Ok(()),
        };

        if let Err(err) = result {
            warn!(error = %err, "Failed to write audit entry");
        }
    }
}
