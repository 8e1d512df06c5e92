//! Core pricing calculation functions.
//!
//! Pure functions for the pricing math - one per pipeline stage, no I/O.
//! Each stage takes the previous stage's output and returns a fresh value;
//! nothing here mutates shared state, so the whole pipeline is deterministic.

use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{BookingType, ItemCategory, LoyaltyTier, PaymentMethod, SeasonalWindow, TaxRegion};
use super::requests::Promotion;
use super::responses::{DiscountResult, FeeLine, FeeResult, TaxResult};

/// Total discount is clamped to this percentage.
pub const MAX_DISCOUNT_PERCENT: Decimal = dec!(30);

/// Fixed service fee applied to every booking.
pub const SERVICE_FEE: Decimal = dec!(10);

/// Surcharge rate (percent) for international bookings.
pub const INTERNATIONAL_SURCHARGE_PERCENT: Decimal = dec!(2.5);

/// Round to the given number of decimal places, half away from zero.
///
/// The final booking price is settled on the cent boundary with commercial
/// rounding (0.005 rounds up), not banker's rounding.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use booking_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(585.795), 2), dec!(585.80));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// assert_eq!(round_money(dec!(-2.005), 2), dec!(-2.01));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculate the base price from the category rate multiplier.
///
/// `base_rate x multiplier x quantity x duration`. Inputs are assumed to be
/// validated upstream; this stage performs no checks of its own.
pub fn calculate_base_price(
    category: ItemCategory,
    base_rate: Decimal,
    quantity: i32,
    duration: Decimal,
) -> Decimal {
    base_rate * category.multiplier() * Decimal::from(quantity) * duration
}

/// Apply the first matching seasonal window's multiplier, if any.
///
/// Windows are scanned in the given order and the scan stops at the first
/// match, so overlapping windows resolve by position. An empty list and a
/// no-match scan both leave the price unchanged.
pub fn apply_seasonal_pricing(
    base_price: Decimal,
    booking_date: NaiveDate,
    seasonal_rates: &[SeasonalWindow],
) -> Decimal {
    if seasonal_rates.is_empty() {
        return base_price;
    }

    let month = booking_date.month0();
    let day = booking_date.day();

    for season in seasonal_rates {
        if season.contains(month, day) {
            return base_price * season.multiplier;
        }
    }

    base_price
}

/// Aggregate loyalty, volume and promotional discounts into one percentage.
///
/// Rules are evaluated in a fixed order and each applied rule appends one
/// reason line. The accumulated percentage is capped at
/// [`MAX_DISCOUNT_PERCENT`]; the cap appends its own notice without
/// rewriting the per-rule reasons.
pub fn calculate_discounts(
    price: Decimal,
    loyalty_tier: Option<LoyaltyTier>,
    promotion: Option<&Promotion>,
    quantity: i32,
) -> DiscountResult {
    let mut total_percent = Decimal::ZERO;
    let mut reasons = Vec::new();

    // Loyalty program discounts
    if let Some(tier) = loyalty_tier {
        let pct = tier.discount_percent();
        total_percent += pct;
        reasons.push(format!("{} tier loyalty ({}%)", tier.display_name(), pct));
    }

    // Volume discount - brackets are mutually exclusive, higher bracket wins
    if (5..10).contains(&quantity) {
        total_percent += dec!(5);
        reasons.push("Volume discount 5-9 items (5%)".to_string());
    } else if quantity >= 10 {
        total_percent += dec!(10);
        reasons.push("Volume discount 10+ items (10%)".to_string());
    }

    // Promotional discount - only percent-type codes with a non-zero value
    if let Some(promo) = promotion {
        if !promo.code.is_empty() && promo.kind == "percent" && !promo.value.is_zero() {
            total_percent += promo.value;
            reasons.push(format!("Promo code {} ({}%)", promo.code, promo.value));
        }
    }

    if total_percent > MAX_DISCOUNT_PERCENT {
        total_percent = MAX_DISCOUNT_PERCENT;
        reasons.push(format!(
            "Maximum discount cap applied ({}%)",
            MAX_DISCOUNT_PERCENT
        ));
    }

    DiscountResult {
        amount: price * (total_percent / dec!(100)),
        percentage: total_percent,
        reasons,
    }
}

/// Compute each tax component from the region's schedule.
///
/// The totals are sums of the component rates and amounts, so
/// `total_tax_amount == price * total_tax_rate / 100` holds exactly in
/// decimal arithmetic.
pub fn calculate_taxes(
    price_after_discounts: Decimal,
    region: TaxRegion,
    is_international: bool,
) -> TaxResult {
    let rates = region.schedule();
    let international_rate = if is_international {
        INTERNATIONAL_SURCHARGE_PERCENT
    } else {
        Decimal::ZERO
    };

    let hundred = dec!(100);
    let base_tax = price_after_discounts * (rates.base / hundred);
    let local_tax = price_after_discounts * (rates.local / hundred);
    let tourist_tax = price_after_discounts * (rates.tourist / hundred);
    let international_fee = price_after_discounts * (international_rate / hundred);

    TaxResult {
        base_tax,
        local_tax,
        tourist_tax,
        international_fee,
        total_tax_rate: rates.base + rates.local + rates.tourist + international_rate,
        total_tax_amount: base_tax + local_tax + tourist_tax + international_fee,
    }
}

/// Resolve the service, processing and booking-type fees.
///
/// Fees are flat amounts independent of the booking price. Additional fees
/// are appended in a fixed order: airport tax for flights, early check-in
/// for hotels, then insurance.
pub fn calculate_fees(
    booking_type: BookingType,
    payment_method: Option<PaymentMethod>,
    early_check_in: bool,
    insurance: bool,
) -> FeeResult {
    // No payment method given means no processing fee at all
    let processing_fee = payment_method
        .map(|m| m.processing_fee())
        .unwrap_or(Decimal::ZERO);

    let mut additional_fees = Vec::new();

    if booking_type == BookingType::Flight {
        additional_fees.push(FeeLine {
            name: "Airport Tax".to_string(),
            amount: dec!(25),
        });
    }

    if booking_type == BookingType::Hotel && early_check_in {
        additional_fees.push(FeeLine {
            name: "Early Check-in".to_string(),
            amount: dec!(30),
        });
    }

    if insurance {
        additional_fees.push(FeeLine {
            name: "Booking Insurance".to_string(),
            amount: dec!(15),
        });
    }

    let additional_total: Decimal = additional_fees.iter().map(|f| f.amount).sum();

    FeeResult {
        service_fee: SERVICE_FEE,
        processing_fee,
        additional_fees,
        total_fees: SERVICE_FEE + processing_fee + additional_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(dec!(2.005), 2), dec!(2.01));
        assert_eq!(round_money(dec!(2.004), 2), dec!(2.00));
        assert_eq!(round_money(dec!(-2.005), 2), dec!(-2.01));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
        assert_eq!(round_money(dec!(585.8), 2), dec!(585.80));
    }

    // ==================== base price tests ====================

    #[test]
    fn test_base_price_deluxe() {
        let price = calculate_base_price(ItemCategory::Deluxe, dec!(100), 2, dec!(3));
        assert_eq!(price, dec!(1800)); // 100 * 3.0 * 2 * 3
    }

    #[test]
    fn test_base_price_unknown_category_uses_default_multiplier() {
        let price = calculate_base_price(
            ItemCategory::from_tag("unknown-xyz"),
            dec!(80),
            3,
            dec!(2),
        );
        assert_eq!(price, dec!(480)); // 80 * 1.0 * 3 * 2
    }

    #[test]
    fn test_base_price_fractional_duration() {
        let price = calculate_base_price(ItemCategory::Standard, dec!(40), 1, dec!(2.5));
        assert_eq!(price, dec!(150)); // 40 * 1.5 * 1 * 2.5
    }

    // ==================== seasonal pricing tests ====================

    fn summer_window() -> SeasonalWindow {
        SeasonalWindow {
            start_month: 5,
            end_month: 8,
            start_day: 1,
            end_day: 31,
            multiplier: dec!(1.25),
        }
    }

    fn year_end_window() -> SeasonalWindow {
        // Nov 15 - Jan 5 expressed as a wrapped range; see the wraparound test
        SeasonalWindow {
            start_month: 11,
            end_month: 0,
            start_day: 15,
            end_day: 5,
            multiplier: dec!(1.5),
        }
    }

    #[test]
    fn test_seasonal_empty_windows_leaves_price_unchanged() {
        let adjusted = apply_seasonal_pricing(dec!(600), date(2023, 7, 15), &[]);
        assert_eq!(adjusted, dec!(600));
    }

    #[test]
    fn test_seasonal_match_applies_multiplier() {
        let adjusted = apply_seasonal_pricing(dec!(600), date(2023, 7, 15), &[summer_window()]);
        assert_eq!(adjusted, dec!(750));
    }

    #[test]
    fn test_seasonal_no_match_leaves_price_unchanged() {
        let adjusted = apply_seasonal_pricing(dec!(600), date(2023, 3, 10), &[summer_window()]);
        assert_eq!(adjusted, dec!(600));
    }

    #[test]
    fn test_seasonal_first_match_wins_over_later_overlap() {
        let windows = vec![
            SeasonalWindow {
                start_month: 5,
                end_month: 8,
                start_day: 1,
                end_day: 31,
                multiplier: dec!(1.25),
            },
            SeasonalWindow {
                start_month: 6,
                end_month: 6,
                start_day: 1,
                end_day: 31,
                multiplier: dec!(2.0),
            },
        ];
        // July 15 falls in both; the first window's multiplier applies
        let adjusted = apply_seasonal_pricing(dec!(100), date(2023, 7, 15), &windows);
        assert_eq!(adjusted, dec!(125));
    }

    #[test]
    fn test_seasonal_wrapped_window_never_matches() {
        // A window with end_month < start_month is unreachable under the
        // literal range test. Dates inside the intended Nov-Jan season pass
        // through unadjusted.
        let windows = vec![year_end_window()];
        assert_eq!(
            apply_seasonal_pricing(dec!(100), date(2023, 12, 20), &windows),
            dec!(100)
        );
        assert_eq!(
            apply_seasonal_pricing(dec!(100), date(2024, 1, 2), &windows),
            dec!(100)
        );
        assert_eq!(
            apply_seasonal_pricing(dec!(100), date(2023, 11, 20), &windows),
            dec!(100)
        );
    }

    // ==================== discount tests ====================

    fn percent_promo(code: &str, value: Decimal) -> Promotion {
        Promotion {
            code: code.to_string(),
            kind: "percent".to_string(),
            value,
        }
    }

    #[test]
    fn test_discount_loyalty_tiers() {
        for (tier, pct) in [
            (LoyaltyTier::Silver, dec!(5)),
            (LoyaltyTier::Gold, dec!(10)),
            (LoyaltyTier::Platinum, dec!(15)),
        ] {
            let result = calculate_discounts(dec!(100), Some(tier), None, 1);
            assert_eq!(result.percentage, pct);
            assert_eq!(result.amount, dec!(100) * pct / dec!(100));
            assert_eq!(result.reasons.len(), 1);
        }
    }

    #[test]
    fn test_discount_no_rules_apply() {
        let result = calculate_discounts(dec!(100), None, None, 1);
        assert_eq!(result.percentage, Decimal::ZERO);
        assert_eq!(result.amount, Decimal::ZERO);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_discount_volume_brackets_mutually_exclusive() {
        let pct = |qty| calculate_discounts(dec!(100), None, None, qty).percentage;
        assert_eq!(pct(4), dec!(0));
        assert_eq!(pct(5), dec!(5));
        assert_eq!(pct(9), dec!(5));
        assert_eq!(pct(10), dec!(10));
        assert_eq!(pct(50), dec!(10));
    }

    #[test]
    fn test_discount_promotion_applied() {
        let promo = percent_promo("SUMMER2023", dec!(10));
        let result = calculate_discounts(dec!(200), None, Some(&promo), 1);
        assert_eq!(result.percentage, dec!(10));
        assert_eq!(result.amount, dec!(20));
        assert_eq!(result.reasons, vec!["Promo code SUMMER2023 (10%)"]);
    }

    #[test]
    fn test_discount_promotion_wrong_kind_ignored() {
        let promo = Promotion {
            code: "FLAT50".to_string(),
            kind: "fixed".to_string(),
            value: dec!(50),
        };
        let result = calculate_discounts(dec!(200), None, Some(&promo), 1);
        assert_eq!(result.percentage, Decimal::ZERO);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_discount_promotion_empty_code_ignored() {
        let promo = percent_promo("", dec!(10));
        let result = calculate_discounts(dec!(200), None, Some(&promo), 1);
        assert_eq!(result.percentage, Decimal::ZERO);
    }

    #[test]
    fn test_discount_promotion_zero_value_ignored() {
        let promo = percent_promo("ZERO", Decimal::ZERO);
        let result = calculate_discounts(dec!(200), None, Some(&promo), 1);
        assert_eq!(result.percentage, Decimal::ZERO);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_discount_cap_clamps_total_and_appends_notice() {
        // platinum 15 + volume 10 + promo 20 = 45, capped at 30
        let promo = percent_promo("BIG20", dec!(20));
        let result = calculate_discounts(dec!(1000), Some(LoyaltyTier::Platinum), Some(&promo), 12);
        assert_eq!(result.percentage, dec!(30));
        assert_eq!(result.amount, dec!(300));
        assert_eq!(
            result.reasons,
            vec![
                "Platinum tier loyalty (15%)",
                "Volume discount 10+ items (10%)",
                "Promo code BIG20 (20%)",
                "Maximum discount cap applied (30%)",
            ]
        );
    }

    #[test]
    fn test_discount_reason_order_matches_rule_order() {
        let promo = percent_promo("X", dec!(10));
        let result = calculate_discounts(dec!(100), Some(LoyaltyTier::Gold), Some(&promo), 7);
        assert_eq!(
            result.reasons,
            vec![
                "Gold tier loyalty (10%)",
                "Volume discount 5-9 items (5%)",
                "Promo code X (10%)",
            ]
        );
        assert_eq!(result.percentage, dec!(25));
    }

    #[test]
    fn test_discount_percentage_always_within_cap() {
        let promo = percent_promo("HUGE", dec!(95));
        for qty in [1, 5, 10] {
            for tier in [None, Some(LoyaltyTier::Platinum)] {
                let result = calculate_discounts(dec!(100), tier, Some(&promo), qty);
                assert!(result.percentage >= Decimal::ZERO);
                assert!(result.percentage <= MAX_DISCOUNT_PERCENT);
            }
        }
    }

    // ==================== tax tests ====================

    #[test]
    fn test_taxes_usa_domestic() {
        let taxes = calculate_taxes(dec!(480), TaxRegion::Usa, false);
        assert_eq!(taxes.base_tax, dec!(24));
        assert_eq!(taxes.local_tax, dec!(12));
        assert_eq!(taxes.tourist_tax, dec!(4.8));
        assert_eq!(taxes.international_fee, Decimal::ZERO);
        assert_eq!(taxes.total_tax_rate, dec!(8.5));
        assert_eq!(taxes.total_tax_amount, dec!(40.8));
    }

    #[test]
    fn test_taxes_international_surcharge() {
        let taxes = calculate_taxes(dec!(100), TaxRegion::Eu, true);
        assert_eq!(taxes.international_fee, dec!(2.5));
        assert_eq!(taxes.total_tax_rate, dec!(25.5)); // 20 + 1 + 2 + 2.5
    }

    #[test]
    fn test_taxes_unknown_location_uses_default_schedule() {
        let taxes = calculate_taxes(dec!(100), TaxRegion::from_tag("mars"), false);
        assert_eq!(taxes.total_tax_rate, dec!(12)); // 10 + 2 + 0
        assert_eq!(taxes.total_tax_amount, dec!(12));
    }

    #[test]
    fn test_taxes_totals_are_component_sums() {
        for region in [TaxRegion::Usa, TaxRegion::Eu, TaxRegion::Asia, TaxRegion::Other] {
            for international in [false, true] {
                let price = dec!(123.45);
                let taxes = calculate_taxes(price, region, international);
                assert_eq!(
                    taxes.total_tax_amount,
                    taxes.base_tax + taxes.local_tax + taxes.tourist_tax + taxes.international_fee
                );
                assert_eq!(
                    taxes.total_tax_amount,
                    price * taxes.total_tax_rate / dec!(100)
                );
            }
        }
    }

    // ==================== fee tests ====================

    #[test]
    fn test_fees_service_fee_always_applied() {
        let fees = calculate_fees(BookingType::Other, None, false, false);
        assert_eq!(fees.service_fee, dec!(10));
        assert_eq!(fees.processing_fee, Decimal::ZERO);
        assert!(fees.additional_fees.is_empty());
        assert_eq!(fees.total_fees, dec!(10));
    }

    #[test]
    fn test_fees_unknown_payment_method_pays_fallback_rate() {
        let fees = calculate_fees(
            BookingType::Other,
            Some(PaymentMethod::from_tag("paypal")),
            false,
            false,
        );
        assert_eq!(fees.processing_fee, dec!(89));
    }

    #[test]
    fn test_fees_flight_airport_tax() {
        let fees = calculate_fees(BookingType::Flight, None, false, false);
        assert_eq!(fees.additional_fees.len(), 1);
        assert_eq!(fees.additional_fees[0].name, "Airport Tax");
        assert_eq!(fees.additional_fees[0].amount, dec!(25));
        assert_eq!(fees.total_fees, dec!(35));
    }

    #[test]
    fn test_fees_early_check_in_hotel_only() {
        let hotel = calculate_fees(BookingType::Hotel, None, true, false);
        assert_eq!(hotel.additional_fees[0].name, "Early Check-in");

        // early check-in on a non-hotel booking adds nothing
        let flight = calculate_fees(BookingType::Flight, None, true, false);
        assert_eq!(flight.additional_fees.len(), 1);
        assert_eq!(flight.additional_fees[0].name, "Airport Tax");
    }

    #[test]
    fn test_fees_hotel_full_options() {
        let fees = calculate_fees(BookingType::Hotel, Some(PaymentMethod::Credit), true, true);
        assert_eq!(fees.service_fee, dec!(10));
        assert_eq!(fees.processing_fee, dec!(10));
        let names: Vec<&str> = fees.additional_fees.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Early Check-in", "Booking Insurance"]);
        assert_eq!(fees.total_fees, dec!(65));
    }
}
