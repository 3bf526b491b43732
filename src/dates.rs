//! Date parsing and the one-year window used by the tobs endpoint.
//!
//! Measurement dates are stored as zero-padded `YYYY-MM-DD` strings, so every
//! date bound handed to the store goes through [`format_date`] to keep string
//! comparison equivalent to date comparison.

use chrono::{Months, NaiveDate};

use crate::error::{KonaError, Result};

/// Storage and URL format of measurement dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date path parameter, rejecting anything that is not a real calendar date
pub fn parse_date_param(param: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| KonaError::InvalidParameter {
        param: param.to_string(),
        message: format!("'{}' is not a valid date in YYYY-MM-DD format ({})", value, e),
    })
}

/// Parse a date read back from the measurement table
pub fn parse_stored_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| KonaError::InvalidData {
        message: format!("Stored measurement date '{}' is malformed: {}", value, e),
    })
}

/// Render a date the way the measurement table stores it
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The same month and day one year earlier.
///
/// February 29 has no counterpart in the previous year and clamps to February 28.
pub fn one_year_before(date: NaiveDate) -> Result<NaiveDate> {
    date.checked_sub_months(Months::new(12))
        .ok_or_else(|| KonaError::InvalidData {
            message: format!("Cannot compute the date one year before {}", date),
        })
}
