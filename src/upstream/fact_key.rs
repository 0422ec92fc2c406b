//! Date-derived lookup key for the fact-of-the-day service.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

/// Month (1-12) and day of month (1-31) selecting the fact of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactKey {
    pub month: u32,
    pub day: u32,
}

impl FactKey {
    /// Key for the current date on the server-local clock.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Path segment appended to the facts base URL, e.g. `3/7`.
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.day)
    }
}
