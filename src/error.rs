//! Error handling for the pricing engine.

/// Pricing calculation error type.
///
/// Validation is the only failure mode: the pipeline itself is total.
/// Unrecognized tags (category, tier, location, payment method) are never
/// errors; they fall back to documented defaults.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// The booking request failed pre-flight validation. `errors` lists
    /// every failed check, not just the first.
    #[error("{message}: {}", errors.join("; "))]
    InvalidBookingInput {
        message: String,
        errors: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display_lists_all_failures() {
        let err = PricingError::InvalidBookingInput {
            message: "Booking request failed validation".to_string(),
            errors: vec![
                "quantity must be positive, got 0".to_string(),
                "location must not be empty".to_string(),
            ],
        };
        let text = err.to_string();
        assert!(text.contains("failed validation"));
        assert!(text.contains("quantity"));
        assert!(text.contains("location"));
    }
}
