//! Demo driver: prices a sample booking and prints the breakdown as JSON.

use anyhow::Context;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

use booking_pricing::pricing::models::SeasonalWindow;
use booking_pricing::pricing::requests::{BookingOptions, BookingRequest, Customer, Promotion};
use booking_pricing::pricing::calculate_booking_amount;

fn main() -> anyhow::Result<()> {
    // Load .env if present (RUST_LOG etc.)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let booking = BookingRequest {
        item_type: "room".to_string(),
        item_category: "deluxe".to_string(),
        base_rate: dec!(100),
        quantity: 2,
        duration: dec!(3),
        booking_date: "2023-07-15".to_string(),
        seasonal_rates: vec![
            // Summer high season
            SeasonalWindow {
                start_month: 5,
                end_month: 8,
                start_day: 1,
                end_day: 31,
                multiplier: dec!(1.25),
            },
            // Year-end season expressed as a wrapped range; unreachable
            // under the literal month/day test, kept as sample data
            SeasonalWindow {
                start_month: 11,
                end_month: 0,
                start_day: 15,
                end_day: 5,
                multiplier: dec!(1.5),
            },
        ],
        customer: Customer {
            name: Some("John Doe".to_string()),
            loyalty_tier: Some("gold".to_string()),
        },
        promotion: Some(Promotion {
            code: "SUMMER2023".to_string(),
            kind: "percent".to_string(),
            value: dec!(10),
        }),
        location: "usa".to_string(),
        is_international: false,
        booking_type: "hotel".to_string(),
        options: BookingOptions {
            payment_method: Some("credit".to_string()),
            early_check_in: true,
            insurance: true,
        },
    };

    let result = calculate_booking_amount(&booking).context("failed to price sample booking")?;

    println!("Booking Calculation Result:");
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
