//! Request DTOs for the pricing entry point.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::SeasonalWindow;

/// A single booking to price.
///
/// The request is an immutable snapshot: one calculation reads it, nothing
/// mutates it. Tags (`item_category`, `location`, `booking_type`, loyalty
/// tier, payment method) are free-form strings resolved case-insensitively
/// inside the pipeline; unrecognized tags fall back to defaults instead of
/// failing.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub item_type: String,
    pub item_category: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_rate: Decimal,
    pub quantity: i32,
    /// Duration of the booking in whatever unit the item uses (nights, hours).
    #[serde(with = "rust_decimal::serde::str")]
    pub duration: Decimal,
    /// ISO-8601 calendar date, e.g. "2023-07-15".
    pub booking_date: String,
    #[serde(default)]
    pub seasonal_rates: Vec<SeasonalWindow>,
    pub customer: Customer,
    #[serde(default)]
    pub promotion: Option<Promotion>,
    pub location: String,
    #[serde(default)]
    pub is_international: bool,
    pub booking_type: String,
    #[serde(default)]
    pub options: BookingOptions,
}

/// Customer information relevant to pricing.
///
/// Only the loyalty tier feeds the calculation; `name` is accepted on the
/// wire but plays no part in pricing and is not echoed in the result.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub loyalty_tier: Option<String>,
}

/// An externally supplied discount code.
///
/// Only `kind == "percent"` with a non-zero value is honored; anything else
/// is silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Promotion {
    pub code: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
}

/// Optional booking add-ons affecting fees.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingOptions {
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub early_check_in: bool,
    #[serde(default)]
    pub insurance: bool,
}
