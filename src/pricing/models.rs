//! Domain model for pricing calculations.
//!
//! Every string tag accepted on the wire (category, tier, location, payment
//! method, booking type) resolves to one of these finite enums. Unrecognized
//! tags fall back to a documented default arm rather than failing - that
//! fallback is part of the pricing contract.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A month/day range with a price multiplier.
///
/// Months are 0-based (January = 0, December = 11). Windows are checked in
/// list order and the first match wins, so overlapping windows are allowed
/// and ordering is meaningful.
///
/// The range test is literal: month and day are compared independently, both
/// inclusive, with no year-end wraparound. A window whose `end_month` is less
/// than its `start_month` can never match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalWindow {
    pub start_month: u32,
    pub end_month: u32,
    pub start_day: u32,
    pub end_day: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub multiplier: Decimal,
}

impl SeasonalWindow {
    /// Check whether a 0-based month and day-of-month fall inside the window.
    pub fn contains(&self, month0: u32, day: u32) -> bool {
        month0 >= self.start_month
            && month0 <= self.end_month
            && day >= self.start_day
            && day <= self.end_day
    }
}

/// Item category/class, driving the base price multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCategory {
    Economy,
    Standard,
    Business,
    Premium,
    Deluxe,
    Suite,
    FirstClass,
    /// Any unrecognized category tag. Prices at the economy multiplier.
    Other,
}

impl ItemCategory {
    /// Resolve a category tag, case-insensitively. Unknown tags map to `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "economy" => Self::Economy,
            "standard" => Self::Standard,
            "business" => Self::Business,
            "premium" => Self::Premium,
            "deluxe" => Self::Deluxe,
            "suite" => Self::Suite,
            "first-class" => Self::FirstClass,
            _ => Self::Other,
        }
    }

    /// Per-unit rate multiplier for this category.
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::Economy | Self::Other => dec!(1.0),
            Self::Standard => dec!(1.5),
            Self::Business => dec!(2.5),
            Self::Premium | Self::Deluxe => dec!(3.0),
            Self::Suite | Self::FirstClass => dec!(4.0),
        }
    }
}

/// Customer loyalty tier. Unrecognized tiers resolve to `None` upstream and
/// contribute no discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoyaltyTier {
    Silver,
    Gold,
    Platinum,
}

impl LoyaltyTier {
    /// Resolve a tier tag, case-insensitively. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "silver" => Some(Self::Silver),
            "gold" => Some(Self::Gold),
            "platinum" => Some(Self::Platinum),
            _ => None,
        }
    }

    /// Flat discount percentage for this tier.
    pub fn discount_percent(&self) -> Decimal {
        match self {
            Self::Silver => dec!(5),
            Self::Gold => dec!(10),
            Self::Platinum => dec!(15),
        }
    }

    /// Display name used in discount reason strings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }
}

/// Location-specific tax rates, each a percentage of the taxable price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxSchedule {
    pub base: Decimal,
    pub local: Decimal,
    pub tourist: Decimal,
}

/// Tax region resolved from the booking location tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxRegion {
    Usa,
    Eu,
    Asia,
    /// Any unrecognized location. Uses the default schedule.
    Other,
}

impl TaxRegion {
    /// Resolve a location tag, case-insensitively. Unknown tags map to `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "usa" => Self::Usa,
            "eu" => Self::Eu,
            "asia" => Self::Asia,
            _ => Self::Other,
        }
    }

    /// Base/local/tourist rate schedule for this region.
    pub fn schedule(&self) -> TaxSchedule {
        match self {
            Self::Usa => TaxSchedule {
                base: dec!(5),
                local: dec!(2.5),
                tourist: dec!(1),
            },
            Self::Eu => TaxSchedule {
                base: dec!(20),
                local: dec!(1),
                tourist: dec!(2),
            },
            Self::Asia => TaxSchedule {
                base: dec!(10),
                local: dec!(2),
                tourist: dec!(3),
            },
            Self::Other => TaxSchedule {
                base: dec!(10),
                local: dec!(2),
                tourist: dec!(0),
            },
        }
    }
}

/// Payment method, driving the processing fee.
///
/// An absent payment method means no processing fee at all; an unrecognized
/// one pays the `Other` rate. The two cases are deliberately different.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Credit,
    Bank,
    Crypto,
    Other,
}

impl PaymentMethod {
    /// Resolve a payment method tag, case-insensitively.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "credit" => Self::Credit,
            "bank" => Self::Bank,
            "crypto" => Self::Crypto,
            _ => Self::Other,
        }
    }

    /// Flat processing fee for this payment method.
    pub fn processing_fee(&self) -> Decimal {
        match self {
            Self::Credit => dec!(10),
            Self::Bank => dec!(22),
            Self::Crypto => dec!(12),
            Self::Other => dec!(89),
        }
    }
}

/// Booking type, driving type-specific flat fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingType {
    Flight,
    Hotel,
    Other,
}

impl BookingType {
    /// Resolve a booking type tag, case-insensitively.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "flight" => Self::Flight,
            "hotel" => Self::Hotel,
            _ => Self::Other,
        }
    }
}
