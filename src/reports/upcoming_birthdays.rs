//! Upcoming Birthdays Report
//!
//! Lists contacts whose birthday falls within the next few days.
//!
//! The window is a day-of-month comparison inside the current month: a
//! birthday matches when its month equals today's month and its day lies
//! between today's day and the day-of-month of `today + window`. Windows that
//! cross into the next month therefore match nothing past the month end, and
//! an end day that wraps below today's day matches nothing at all. Matches
//! are ordered by the full stored date, year first.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{AddressBook, Birthday};

/// Message shown when nothing matches
pub const NO_UPCOMING_BIRTHDAYS: &str = "No upcoming birthdays within the next week.";

/// First line of the report when something matches
pub const UPCOMING_BIRTHDAYS_HEADER: &str = "Upcoming birthdays:";

/// One matching contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday: Birthday,
}

/// Upcoming Birthdays Report
#[derive(Debug, Clone)]
pub struct UpcomingBirthdaysReport {
    /// Start date plus the window length
    pub window_end: NaiveDate,
    /// Matching contacts, ordered by birthday
    pub entries: Vec<UpcomingBirthday>,
}

impl UpcomingBirthdaysReport {
    /// Generate the report relative to `today`
    pub fn generate(book: &AddressBook, today: NaiveDate, window_days: u32) -> Self {
        let window_end = today
            .checked_add_days(Days::new(u64::from(window_days)))
            .unwrap_or(NaiveDate::MAX);

        let mut entries: Vec<UpcomingBirthday> = book
            .all_records()
            .filter_map(|record| {
                let birthday = *record.birthday()?;
                in_window(&birthday, today, window_end).then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    birthday,
                })
            })
            .collect();

        entries.sort_by_key(|entry| entry.birthday);

        Self {
            window_end,
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A header, then one "{name}'s birthday: DD.MM.YYYY" line per match
    pub fn format_text(&self) -> String {
        if self.entries.is_empty() {
            return NO_UPCOMING_BIRTHDAYS.to_string();
        }

        let mut lines = vec![UPCOMING_BIRTHDAYS_HEADER.to_string()];
        lines.extend(
            self.entries
                .iter()
                .map(|entry| format!("{}'s birthday: {}", entry.name, entry.birthday)),
        );
        lines.join("\n")
    }
}

fn in_window(birthday: &Birthday, today: NaiveDate, window_end: NaiveDate) -> bool {
    birthday.month() == today.month()
        && today.day() <= birthday.day()
        && birthday.day() <= window_end.day()
}
