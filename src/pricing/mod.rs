//! Booking pricing pipeline.
//!
//! Turns a single [`requests::BookingRequest`] into a final charge with a
//! fully itemized breakdown: base price, seasonal adjustment, discounts,
//! taxes and fees, applied in that fixed order.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod services;

// Re-export commonly used items
pub use calculators::round_money;
pub use requests::BookingRequest;
pub use responses::BookingCalculationResult;
pub use services::calculate_booking_amount;
