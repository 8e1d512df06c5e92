//! Deterministic pricing engine for bookings (rooms, seats, tickets).
//!
//! The crate exposes one entry point,
//! [`pricing::calculate_booking_amount`], a pure synchronous function from
//! an immutable booking request to an itemized calculation result. There is
//! no persistence, no currency conversion and no I/O; calls are independent
//! and safe to run concurrently.

pub mod error;
pub mod pricing;

pub use error::PricingError;
pub use pricing::{calculate_booking_amount, BookingCalculationResult, BookingRequest};
