//! Per-command business logic
//!
//! Each public handler takes the arguments after the command word plus the
//! address book and always returns the text to show the user. Failures are
//! translated by [`error_message`]; nothing here returns an error to the
//! shell.

use chrono::NaiveDate;

use crate::error::{ContactsError, ContactsResult};
use crate::models::{AddressBook, Record};
use crate::reports::UpcomingBirthdaysReport;

/// Shown for any field validation failure and for a wrong argument count on
/// `add`, `change` or `add-birthday`
pub const BAD_NAME_OR_PHONE: &str = "Give me name and correct format of phone (10 digits) please.";

/// Shown for lookups that fail inside a handler
pub const NO_CONTACT_FOUND: &str = "No contact found.";

/// Shown when the contact name is missing
pub const ENTER_USERNAME: &str = "Enter username.";

/// Translate a handler error into the sentence shown to the user
pub fn error_message(err: &ContactsError) -> String {
    match err {
        ContactsError::Validation(_) => BAD_NAME_OR_PHONE.to_string(),
        ContactsError::NotFound { .. } => NO_CONTACT_FOUND.to_string(),
        ContactsError::MissingArgument(_) => ENTER_USERNAME.to_string(),
        other => other.to_string(),
    }
}

fn reply(result: ContactsResult<String>) -> String {
    result.unwrap_or_else(|err| error_message(&err))
}

/// `name` and `phone`, ignoring anything after them
fn name_and_phone<'a>(args: &[&'a str]) -> ContactsResult<(&'a str, &'a str)> {
    match args {
        [name, phone, ..] => Ok((*name, *phone)),
        _ => Err(ContactsError::Validation(
            "expected a name and a phone number".into(),
        )),
    }
}

/// Exactly `name` and `phone`
fn exact_name_and_phone<'a>(args: &[&'a str]) -> ContactsResult<(&'a str, &'a str)> {
    match args {
        [name, phone] => Ok((*name, *phone)),
        _ => Err(ContactsError::Validation(
            "expected exactly a name and a phone number".into(),
        )),
    }
}

fn username<'a>(args: &[&'a str]) -> ContactsResult<&'a str> {
    args.first()
        .copied()
        .ok_or(ContactsError::MissingArgument("name"))
}

/// `add <name> <phone>`: create the contact if needed, then append the phone
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> String {
    reply(try_add_contact(args, book))
}

fn try_add_contact(args: &[&str], book: &mut AddressBook) -> ContactsResult<String> {
    let (name, phone) = name_and_phone(args)?;

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        book.add_record(Record::new(name));
        "Contact added."
    };

    if !phone.is_empty() {
        book.find_mut(name)
            .ok_or_else(|| ContactsError::contact_not_found(name))?
            .add_phone(phone)?;
    }

    Ok(message.to_string())
}

/// `change <name> <phone>`: replace all of a contact's phones with one
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> String {
    reply(try_change_contact(args, book))
}

fn try_change_contact(args: &[&str], book: &mut AddressBook) -> ContactsResult<String> {
    let (name, phone) = exact_name_and_phone(args)?;

    match book.find_mut(name) {
        Some(record) => {
            record.replace_phones(phone)?;
            Ok("Contact updated successfully".to_string())
        }
        None => Ok("Contact not found.".to_string()),
    }
}

/// `phone <name>`: show the number that would be called
pub fn phone_contact(args: &[&str], book: &AddressBook) -> String {
    reply(try_phone_contact(args, book))
}

fn try_phone_contact(args: &[&str], book: &AddressBook) -> ContactsResult<String> {
    let name = username(args)?;

    match book.find(name) {
        Some(record) => {
            let phone = record
                .first_phone()
                .ok_or_else(|| ContactsError::phone_not_found(name))?;
            Ok(format!("Calling a phone number for {}: {}", name, phone))
        }
        None => Ok(format!("No contact found with username {}", name)),
    }
}

/// `show <name>`: describe one contact
pub fn show_contact(args: &[&str], book: &AddressBook) -> String {
    reply(try_show_contact(args, book))
}

fn try_show_contact(args: &[&str], book: &AddressBook) -> ContactsResult<String> {
    let name = username(args)?;

    Ok(match book.find(name) {
        Some(record) => record.describe(),
        None => format!("No contact found with username {}", name),
    })
}

/// `all`: describe every contact, one per line
pub fn all_contacts(book: &AddressBook) -> String {
    book.all_records()
        .map(Record::describe)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> String {
    reply(try_add_birthday(args, book))
}

fn try_add_birthday(args: &[&str], book: &mut AddressBook) -> ContactsResult<String> {
    let (name, birthday) = match args {
        [name, birthday] => (*name, *birthday),
        [_, _, _, ..] => {
            return Err(ContactsError::Validation(
                "expected exactly a name and a birthday".into(),
            ))
        }
        _ => {
            return Err(ContactsError::Usage(
                "Add a user name and birthday please.".into(),
            ))
        }
    };

    Ok(match book.find_mut(name) {
        Some(record) => match record.add_birthday(birthday) {
            Ok(()) => format!("Birthday added for {}.", name),
            Err(err) => err.to_string(),
        },
        None => "Contact not found.".to_string(),
    })
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> String {
    reply(try_show_birthday(args, book))
}

fn try_show_birthday(args: &[&str], book: &AddressBook) -> ContactsResult<String> {
    let name = username(args)?;

    Ok(match book.find(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => format!("{}'s birthday: {}", name, birthday),
            None => format!("{} has no birthday set.", name),
        },
        None => "Contact not found.".to_string(),
    })
}

/// `birthdays`: contacts with a birthday in the coming window
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: u32) -> String {
    UpcomingBirthdaysReport::generate(book, today, window_days).format_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phones(book: &AddressBook, name: &str) -> Vec<String> {
        book.find(name)
            .unwrap()
            .phones()
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    fn book_with_alice() -> AddressBook {
        let mut book = AddressBook::new();
        add_contact(&["alice", "5551234567"], &mut book);
        book
    }

    #[test]
    fn test_add_then_show() {
        let mut book = AddressBook::new();
        assert_eq!(add_contact(&["alice", "5551234567"], &mut book), "Contact added.");
        assert_eq!(
            show_contact(&["alice"], &book),
            "Contact name: alice, phones: 5551234567"
        );
    }

    #[test]
    fn test_add_existing_appends_phone() {
        let mut book = book_with_alice();
        assert_eq!(
            add_contact(&["alice", "5559999999"], &mut book),
            "Contact updated."
        );
        assert_eq!(phones(&book, "alice"), ["5551234567", "5559999999"]);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_with_invalid_phone() {
        let mut book = book_with_alice();
        assert_eq!(add_contact(&["alice", "555"], &mut book), BAD_NAME_OR_PHONE);
        assert_eq!(phones(&book, "alice"), ["5551234567"]);

        // A new contact is still created before the phone is rejected
        assert_eq!(add_contact(&["bob", "not-a-phone"], &mut book), BAD_NAME_OR_PHONE);
        assert!(book.find("bob").unwrap().phones().is_empty());
    }

    #[test]
    fn test_add_with_missing_arguments() {
        let mut book = AddressBook::new();
        assert_eq!(add_contact(&[], &mut book), BAD_NAME_OR_PHONE);
        assert_eq!(add_contact(&["alice"], &mut book), BAD_NAME_OR_PHONE);
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_ignores_extra_arguments() {
        let mut book = AddressBook::new();
        assert_eq!(
            add_contact(&["alice", "5551234567", "extra"], &mut book),
            "Contact added."
        );
        assert_eq!(phones(&book, "alice"), ["5551234567"]);
    }

    #[test]
    fn test_change_replaces_all_phones() {
        let mut book = book_with_alice();
        add_contact(&["alice", "5559999999"], &mut book);

        assert_eq!(
            change_contact(&["alice", "1112223333"], &mut book),
            "Contact updated successfully"
        );
        assert_eq!(phones(&book, "alice"), ["1112223333"]);
    }

    #[test]
    fn test_change_errors() {
        let mut book = book_with_alice();
        assert_eq!(
            change_contact(&["bob", "1112223333"], &mut book),
            "Contact not found."
        );
        assert_eq!(change_contact(&["alice", "12"], &mut book), BAD_NAME_OR_PHONE);
        assert_eq!(change_contact(&["alice"], &mut book), BAD_NAME_OR_PHONE);
        assert_eq!(phones(&book, "alice"), ["5551234567"]);
    }

    #[test]
    fn test_change_rejects_extra_arguments() {
        let mut book = book_with_alice();
        assert_eq!(
            change_contact(&["alice", "1112223333", "x"], &mut book),
            BAD_NAME_OR_PHONE
        );
        assert_eq!(phones(&book, "alice"), ["5551234567"]);
    }

    #[test]
    fn test_phone() {
        let mut book = book_with_alice();
        add_contact(&["alice", "5559999999"], &mut book);

        assert_eq!(
            phone_contact(&["alice"], &book),
            "Calling a phone number for alice: 5551234567"
        );
        assert_eq!(
            phone_contact(&["bob"], &book),
            "No contact found with username bob"
        );
        assert_eq!(phone_contact(&[], &book), ENTER_USERNAME);
    }

    #[test]
    fn test_phone_without_numbers() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("alice"));
        assert_eq!(phone_contact(&["alice"], &book), NO_CONTACT_FOUND);
    }

    #[test]
    fn test_show_errors() {
        let book = book_with_alice();
        assert_eq!(
            show_contact(&["bob"], &book),
            "No contact found with username bob"
        );
        assert_eq!(show_contact(&[], &book), ENTER_USERNAME);
    }

    #[test]
    fn test_all_contacts() {
        let mut book = book_with_alice();
        assert_eq!(all_contacts(&AddressBook::new()), "");

        add_contact(&["bob", "1112223333"], &mut book);
        assert_eq!(
            all_contacts(&book),
            "Contact name: alice, phones: 5551234567\n\
             Contact name: bob, phones: 1112223333"
        );
    }

    #[test]
    fn test_birthday_flow() {
        let mut book = book_with_alice();

        assert_eq!(
            show_birthday(&["alice"], &book),
            "alice has no birthday set."
        );
        assert_eq!(
            add_birthday(&["alice", "15.06.1990"], &mut book),
            "Birthday added for alice."
        );
        assert_eq!(
            show_birthday(&["alice"], &book),
            "alice's birthday: 15.06.1990"
        );
    }

    #[test]
    fn test_add_birthday_errors() {
        let mut book = book_with_alice();

        assert_eq!(
            add_birthday(&["alice"], &mut book),
            "Add a user name and birthday please."
        );
        assert_eq!(
            add_birthday(&["alice", "1990-06-15"], &mut book),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(
            add_birthday(&["alice", "31.06.1990"], &mut book),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(
            add_birthday(&["bob", "15.06.1990"], &mut book),
            "Contact not found."
        );
        assert!(book.find("alice").unwrap().birthday().is_none());
    }

    #[test]
    fn test_add_birthday_rejects_extra_arguments() {
        let mut book = book_with_alice();
        assert_eq!(
            add_birthday(&["alice", "15.06.1990", "x"], &mut book),
            BAD_NAME_OR_PHONE
        );
        assert!(book.find("alice").unwrap().birthday().is_none());
    }

    #[test]
    fn test_show_birthday_errors() {
        let book = book_with_alice();
        assert_eq!(show_birthday(&[], &book), ENTER_USERNAME);
        assert_eq!(show_birthday(&["bob"], &book), "Contact not found.");
    }

    #[test]
    fn test_birthdays() {
        let mut book = book_with_alice();
        add_birthday(&["alice", "12.06.1990"], &mut book);
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        assert_eq!(
            birthdays(&book, today, 7),
            "Upcoming birthdays:\nalice's birthday: 12.06.1990"
        );
        assert_eq!(
            birthdays(&AddressBook::new(), today, 7),
            "No upcoming birthdays within the next week."
        );
    }

    #[test]
    fn test_error_message_translation() {
        assert_eq!(
            error_message(&ContactsError::Validation("x".into())),
            BAD_NAME_OR_PHONE
        );
        assert_eq!(
            error_message(&ContactsError::contact_not_found("x")),
            NO_CONTACT_FOUND
        );
        assert_eq!(
            error_message(&ContactsError::MissingArgument("name")),
            ENTER_USERNAME
        );
        assert_eq!(
            error_message(&ContactsError::Usage("Try again.".into())),
            "Try again."
        );
    }
}
