//! Contact record model
//!
//! A record owns one immutable name, an ordered list of phone numbers
//! (duplicates allowed), and at most one birthday.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::field::{Birthday, FieldValidationError, Name, Phone};

/// One contact's full data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// The phone that `phone` dials
    pub fn first_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }

    /// Validate and append a phone number
    ///
    /// The record is left unchanged if validation fails.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), FieldValidationError> {
        let phone = Phone::parse(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the entire phone list with a single validated number
    pub fn replace_phones(&mut self, phone: &str) -> Result<(), FieldValidationError> {
        let phone = Phone::parse(phone)?;
        self.phones = vec![phone];
        Ok(())
    }

    /// Validate and set the birthday, overwriting any previous one
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), FieldValidationError> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    /// One-line description used by `show` and `all`
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join(", ")
        )
    }
}
