//! Validated field values for a contact
//!
//! Every field validates on construction, so an invalid phone number or
//! birthday can never exist in memory. Fields render back to text through
//! `Display`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text format for birthdays, both parsed and rendered
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Number of digits a phone number must have
pub const PHONE_LENGTH: usize = 10;

/// A contact's name. Any text is accepted and stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number: exactly ten ASCII digits, no normalization
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Validate and wrap a phone number
    pub fn parse(value: &str) -> Result<Self, FieldValidationError> {
        if value.chars().count() != PHONE_LENGTH || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(FieldValidationError::InvalidPhone);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = FieldValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday, stored as a calendar date and written as `DD.MM.YYYY`
///
/// Ordering compares the full date, year first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` birthday
    ///
    /// Day and month must be two digits and the year four, so that a valid
    /// input always renders back to the identical text. Years start at 0001.
    pub fn parse(value: &str) -> Result<Self, FieldValidationError> {
        if !has_birthday_shape(value) {
            return Err(FieldValidationError::InvalidBirthday);
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .ok()
            .filter(|date| date.year() >= 1)
            .map(Self)
            .ok_or(FieldValidationError::InvalidBirthday)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

/// `DD.MM.YYYY` with ASCII digits and literal dots
fn has_birthday_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

impl TryFrom<String> for Birthday {
    type Error = FieldValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

/// Validation errors for contact fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValidationError {
    InvalidPhone,
    InvalidBirthday,
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone => write!(f, "Invalid phone number format"),
            Self::InvalidBirthday => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for FieldValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_anything() {
        assert_eq!(Name::new("alice").to_string(), "alice");
        assert_eq!(Name::new("").as_str(), "");
    }

    #[test]
    fn test_valid_phone_renders_identically() {
        for text in ["5551234567", "0000000000", "0123456789"] {
            let phone = Phone::parse(text).unwrap();
            assert_eq!(phone.to_string(), text);
        }
    }

    #[test]
    fn test_invalid_phones() {
        for text in [
            "",
            "555123456",
            "55512345678",
            "555-123-4567",
            "555123456a",
            " 5551234567",
            "(555)12345",
            "５５５１２３４５６７",
        ] {
            assert_eq!(
                Phone::parse(text),
                Err(FieldValidationError::InvalidPhone),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_valid_birthday_round_trips() {
        for text in ["15.06.1990", "29.02.2000", "01.01.0001", "31.12.2024"] {
            let birthday = Birthday::parse(text).unwrap();
            assert_eq!(birthday.to_string(), text);
        }
    }

    #[test]
    fn test_birthday_fields() {
        let birthday = Birthday::parse("15.06.1990").unwrap();
        assert_eq!(birthday.day(), 15);
        assert_eq!(birthday.month(), 6);
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
    }

    #[test]
    fn test_invalid_birthdays() {
        for text in [
            "",
            "1990-06-15",
            "15/06/1990",
            "5.6.1990",
            "15.06.90",
            "31.04.2024",
            "29.02.2023",
            "00.01.2024",
            "15.13.2024",
            "01.01.0000",
            "aa.bb.cccc",
            "15.06.1990 ",
        ] {
            assert_eq!(
                Birthday::parse(text),
                Err(FieldValidationError::InvalidBirthday),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_birthday_ordering_uses_year_first() {
        let older = Birthday::parse("20.06.1980").unwrap();
        let younger = Birthday::parse("10.06.1990").unwrap();
        assert!(older < younger);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FieldValidationError::InvalidPhone.to_string(),
            "Invalid phone number format"
        );
        assert_eq!(
            FieldValidationError::InvalidBirthday.to_string(),
            "Invalid date format. Use DD.MM.YYYY"
        );
    }

    #[test]
    fn test_serialization_revalidates() {
        let phone: Phone = serde_json::from_str(r#""5551234567""#).unwrap();
        assert_eq!(phone.as_str(), "5551234567");
        assert!(serde_json::from_str::<Phone>(r#""123""#).is_err());

        let birthday = Birthday::parse("15.06.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, r#""15.06.1990""#);
        assert!(serde_json::from_str::<Birthday>(r#""31.02.1990""#).is_err());
    }
}
