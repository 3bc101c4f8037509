//! Command layer for the contact shell
//!
//! Splits an input line into a command word and positional arguments, maps
//! the word to a [`Command`], and runs the matching handler against the
//! address book.

pub mod handlers;

use chrono::NaiveDate;

use crate::models::AddressBook;

pub use handlers::error_message;

/// Reply for a word that names no command
pub const INVALID_COMMAND: &str = "Invalid command.";

/// A recognized command word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Show,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl Command {
    /// Look up a command word, ignoring case
    pub fn parse(word: &str) -> Option<Self> {
        let command = match word.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "show" => Self::Show,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }

    /// Whether the command can create or modify the contact named by its first argument
    pub fn is_mutating(self) -> bool {
        matches!(self, Self::Add | Self::Change | Self::AddBirthday)
    }
}

/// One tokenized input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input<'a> {
    /// The command word as typed
    pub word: &'a str,
    /// Remaining whitespace-separated tokens, verbatim
    pub args: Vec<&'a str>,
}

/// Split a line on whitespace; blank lines yield `None`
pub fn parse_input(line: &str) -> Option<Input<'_>> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next()?;
    Some(Input {
        word,
        args: tokens.collect(),
    })
}

/// Outcome of running one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user; may be empty
    Message(String),
    /// Save and leave the shell
    Exit,
}

/// Run `command` with its arguments
///
/// `today` and `window_days` parameterize the `birthdays` query.
pub fn execute(
    command: Command,
    args: &[&str],
    book: &mut AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> Reply {
    let message = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Add => handlers::add_contact(args, book),
        Command::Change => handlers::change_contact(args, book),
        Command::Show => handlers::show_contact(args, book),
        Command::Phone => handlers::phone_contact(args, book),
        Command::All => handlers::all_contacts(book),
        Command::AddBirthday => handlers::add_birthday(args, book),
        Command::ShowBirthday => handlers::show_birthday(args, book),
        Command::Birthdays => handlers::birthdays(book, today, window_days),
        Command::Exit => return Reply::Exit,
    };
    Reply::Message(message)
}
