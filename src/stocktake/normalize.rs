//! # Record Normalization
//!
//! Turns the raw string fields of a product (as they appear in the seed CSV or
//! at the interactive prompts) into typed values.
//!
//! | Field      | Accepted input        | Typed value             |
//! |------------|-----------------------|-------------------------|
//! | name       | any text              | trimmed `String`        |
//! | price      | `$D+.DD`              | total cents (`i64`)     |
//! | quantity   | integer, `>= 0`       | `i64`                   |
//! | date       | `M/D/YYYY` or empty   | `NaiveDate` (today if empty) |
//!
//! The normalizer does not reject empty names or zero quantities: those are
//! rules of the interactive add, see `commands::add`.

use crate::error::{InventoryError, Result};
use crate::model::NewProduct;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const CURRENCY_SYMBOL: char = '$';

/// One row of the seed or backup CSV, exactly as written in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub product_name: String,
    pub product_price: String,
    pub product_quantity: String,
    #[serde(default)]
    pub date_updated: Option<String>,
}

impl RawRecord {
    pub fn normalize(&self, today: NaiveDate) -> Result<NewProduct> {
        let last_updated = match self.date_updated.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(raw) => parse_date(raw)?,
        };

        Ok(NewProduct {
            name: parse_name(&self.product_name),
            price: parse_price(&self.product_price)?,
            quantity: parse_quantity(&self.product_quantity)?,
            last_updated,
        })
    }
}

pub fn parse_name(raw: &str) -> String {
    raw.trim().to_string()
}

/// Parses `$D+.DD` into cents.
pub fn parse_price(raw: &str) -> Result<i64> {
    let malformed = || InventoryError::MalformedPrice(raw.to_string());

    let amount = raw
        .trim()
        .strip_prefix(CURRENCY_SYMBOL)
        .ok_or_else(malformed)?;
    let (dollars, cents) = amount.split_once('.').ok_or_else(malformed)?;

    if dollars.is_empty() || !dollars.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    if cents.len() != 2 || !cents.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let dollars: i64 = dollars.parse().map_err(|_| malformed())?;
    let cents: i64 = cents.parse().map_err(|_| malformed())?;

    dollars
        .checked_mul(100)
        .and_then(|d| d.checked_add(cents))
        .ok_or_else(malformed)
}

/// Parses a unit count. Negative counts are rejected here so every entry path
/// (seed file and interactive add) shares the same floor.
pub fn parse_quantity(raw: &str) -> Result<i64> {
    let quantity: i64 = raw
        .trim()
        .parse()
        .map_err(|_| InventoryError::InvalidQuantity(raw.to_string(), "not a whole number"))?;
    if quantity < 0 {
        return Err(InventoryError::InvalidQuantity(
            raw.to_string(),
            "must not be negative",
        ));
    }
    Ok(quantity)
}

/// Parses `M/D/YYYY`. Leading zeros on month and day are tolerated; the year
/// must have four digits.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let malformed = || InventoryError::MalformedDate(raw.to_string());

    let mut parts = raw.trim().split('/');
    let (Some(month), Some(day), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };

    let is_number = |s: &str, max_len: usize| {
        !s.is_empty() && s.len() <= max_len && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !is_number(month, 2) || !is_number(day, 2) || year.len() != 4 || !is_number(year, 4) {
        return Err(malformed());
    }

    let month: u32 = month.parse().map_err(|_| malformed())?;
    let day: u32 = day.parse().map_err(|_| malformed())?;
    let year: i32 = year.parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

/// Formats cents as `$D.DD`.
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{}{}{}.{:02}", sign, CURRENCY_SYMBOL, cents / 100, cents % 100)
}

/// Formats a date as `M/D/YYYY`, the seed file's form.
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
