//! Booking pricing service: input validation and the pipeline aggregator.
//!
//! [`calculate_booking_amount`] is the single entry point. It validates the
//! request, resolves string tags to domain enums, then runs the pure stage
//! calculators in strict sequence and assembles the full calculation trace.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::PricingError;

use super::calculators::{
    apply_seasonal_pricing, calculate_base_price, calculate_discounts, calculate_fees,
    calculate_taxes, round_money,
};
use super::models::{BookingType, ItemCategory, LoyaltyTier, PaymentMethod, TaxRegion};
use super::requests::BookingRequest;
use super::responses::{BookingCalculationResult, BookingSummary};

/// Validate a booking request and resolve its calendar date.
///
/// All checks run in one pass and every failure is reported, not just the
/// first. Unrecognized category/tier/location/payment-method tags are NOT
/// validation failures - they fall back to defaults inside the pipeline.
fn validate(request: &BookingRequest) -> Result<NaiveDate, PricingError> {
    let mut errors = Vec::new();

    if request.base_rate <= Decimal::ZERO {
        errors.push(format!("base_rate must be positive, got {}", request.base_rate));
    }
    if request.quantity <= 0 {
        errors.push(format!("quantity must be positive, got {}", request.quantity));
    }
    if request.duration <= Decimal::ZERO {
        errors.push(format!("duration must be positive, got {}", request.duration));
    }
    if request.location.is_empty() {
        errors.push("location must not be empty".to_string());
    }
    if request.booking_type.is_empty() {
        errors.push("booking_type must not be empty".to_string());
    }

    let booking_date = match request.booking_date.parse::<NaiveDate>() {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(format!(
                "booking_date is not a valid calendar date: {:?}",
                request.booking_date
            ));
            None
        }
    };

    match booking_date {
        Some(date) if errors.is_empty() => Ok(date),
        _ => Err(PricingError::InvalidBookingInput {
            message: "Booking request failed validation".to_string(),
            errors,
        }),
    }
}

/// Price a booking and return the full itemized breakdown.
///
/// Stages run in fixed order: base price, seasonal adjustment, discounts
/// (computed on the seasonal-adjusted price), taxes (computed on the price
/// after discounts), fees (independent of price). The final price is the
/// discounted price plus taxes plus fees, rounded to the cent half away
/// from zero.
///
/// The calculation is a pure function of the request: no I/O, no mutation,
/// and repeated calls with the same input produce identical results.
pub fn calculate_booking_amount(
    request: &BookingRequest,
) -> Result<BookingCalculationResult, PricingError> {
    let booking_date = validate(request)?;

    let category = ItemCategory::from_tag(&request.item_category);
    let loyalty_tier = request
        .customer
        .loyalty_tier
        .as_deref()
        .and_then(LoyaltyTier::from_tag);
    let region = TaxRegion::from_tag(&request.location);
    let booking_type = BookingType::from_tag(&request.booking_type);
    let payment_method = request
        .options
        .payment_method
        .as_deref()
        .map(PaymentMethod::from_tag);

    let base_price = calculate_base_price(
        category,
        request.base_rate,
        request.quantity,
        request.duration,
    );

    let seasonal_adjusted_price =
        apply_seasonal_pricing(base_price, booking_date, &request.seasonal_rates);

    let discounts = calculate_discounts(
        seasonal_adjusted_price,
        loyalty_tier,
        request.promotion.as_ref(),
        request.quantity,
    );
    let price_after_discounts = seasonal_adjusted_price - discounts.amount;

    let taxes = calculate_taxes(price_after_discounts, region, request.is_international);

    let fees = calculate_fees(
        booking_type,
        payment_method,
        request.options.early_check_in,
        request.options.insurance,
    );

    let final_price = round_money(
        price_after_discounts + taxes.total_tax_amount + fees.total_fees,
        2,
    );

    tracing::debug!(
        %base_price,
        %price_after_discounts,
        %final_price,
        "priced booking of {} x{}",
        request.item_type,
        request.quantity,
    );

    Ok(BookingCalculationResult {
        booking: BookingSummary {
            booking_type: request.booking_type.clone(),
            item: request.item_type.clone(),
            category: request.item_category.clone(),
            quantity: request.quantity,
            duration: request.duration,
        },
        base_price,
        seasonal_adjusted_price,
        discounts,
        price_after_discounts,
        taxes,
        fees,
        final_price,
    })
}
