//! Display formatting for monetary amounts.

/// Currency symbol prefixed to every formatted amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Render an amount as the currency symbol followed by exactly two decimals.
pub fn format_amount(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_two_decimals() {
        assert_eq!(format_amount(4.5), "₹4.50");
        assert_eq!(format_amount(10.0), "₹10.00");
    }

    #[test]
    fn rounds_extra_precision() {
        assert_eq!(format_amount(0.129), "₹0.13");
        assert_eq!(format_amount(1234.561), "₹1234.56");
    }
}
