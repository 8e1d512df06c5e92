//! Response DTOs for the pricing entry point.
//!
//! The calculation result is a full audit trail: every intermediate figure
//! (base price, seasonal adjustment, discounts, taxes, fees) is carried into
//! the output so callers can show how the final number was derived.

use rust_decimal::Decimal;
use serde::Serialize;

/// Aggregated discount with its audit trail.
///
/// `reasons` holds one human-readable line per applied rule, in evaluation
/// order (loyalty, volume, promotion). When the cap triggers, a cap notice is
/// appended after the per-rule reasons; those earlier reasons still report
/// the pre-cap contributions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountResult {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Final discount percentage, after the cap.
    #[serde(with = "rust_decimal::serde::str")]
    pub percentage: Decimal,
    pub reasons: Vec<String>,
}

/// Per-component tax breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxResult {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_tax: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub local_tax: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub tourist_tax: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub international_fee: Decimal,
    /// Sum of the four component rate percentages.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_tax_rate: Decimal,
    /// Sum of the four component amounts.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_tax_amount: Decimal,
}

/// A named flat fee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeLine {
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

/// Fee breakdown: fixed service fee, payment-method processing fee, and
/// booking-type/option-driven flat fees in application order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeResult {
    #[serde(with = "rust_decimal::serde::str")]
    pub service_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub processing_fee: Decimal,
    pub additional_fees: Vec<FeeLine>,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_fees: Decimal,
}

/// Echo of the booking's identity fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingSummary {
    pub booking_type: String,
    pub item: String,
    pub category: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub duration: Decimal,
}

/// Complete calculation trace for one booking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingCalculationResult {
    pub booking: BookingSummary,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub seasonal_adjusted_price: Decimal,
    pub discounts: DiscountResult,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_after_discounts: Decimal,
    pub taxes: TaxResult,
    pub fees: FeeResult,
    /// Rounded to 2 decimal places, half away from zero.
    #[serde(with = "rust_decimal::serde::str")]
    pub final_price: Decimal,
}
