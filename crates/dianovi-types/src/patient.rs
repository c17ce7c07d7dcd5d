//! Patient wire model and date-of-birth validation.
//!
//! Responsibilities:
//! - Define the exact JSON shape exchanged with the backend for patient
//!   records
//! - Validate prompted date-of-birth input before it reaches the wire
//!
//! The wire model is deliberately lenient on input: unknown keys in a
//! backend response are ignored rather than rejected.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The date format the backend accepts for `date_of_birth`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A patient record as exchanged with the backend.
///
/// The same shape is used for list/read responses and for create/update
/// request bodies. `patient_id` is user-supplied and unique on the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Unique, user-supplied identifier.
    pub patient_id: String,
    /// Display name.
    pub name: String,
    /// ISO date string (`YYYY-MM-DD`).
    pub date_of_birth: String,
}

/// Errors that can occur when validating a date of birth.
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    /// The input did not parse as a `YYYY-MM-DD` calendar date
    #[error("date must be a valid YYYY-MM-DD date: {0}")]
    Format(chrono::ParseError),
}

/// A date-of-birth string validated against the backend's date format.
///
/// The backend parses `date_of_birth` as a calendar date, so sending an
/// arbitrary string would be rejected server-side. Validating here keeps
/// the failure local to the prompt that collected the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthDate(String);

impl BirthDate {
    /// Validates the given input as a `YYYY-MM-DD` date.
    ///
    /// The input is trimmed before parsing. The stored value is the trimmed
    /// original text, not a re-rendered date, so what the user typed is what
    /// goes on the wire.
    ///
    /// # Errors
    ///
    /// Returns `DateError::Format` if the input is not a valid calendar date
    /// in `YYYY-MM-DD` form.
    pub fn new(input: impl AsRef<str>) -> Result<Self, DateError> {
        let trimmed = input.as_ref().trim();
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(DateError::Format)?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the validated date as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value and returns the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
