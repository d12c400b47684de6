//! Lenient coercion of admin form input.
//!
//! The edit form feeds raw strings; anything non-numeric coerces to a safe
//! zero instead of rejecting the edit. Prices go through
//! [`vitrine_core::Money::parse_lenient`]; this module covers the stock field.

/// Parse a stock entry, coercing garbage (or negatives) to zero.
pub fn coerce_stock(input: &str) -> u32 {
    let trimmed = input.trim();
    if let Ok(stock) = trimmed.parse::<u32>() {
        return stock;
    }
    // "12.0"-style entries still count; anything else is zero.
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value.trunc() as u32,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(coerce_stock("12"), 12);
        assert_eq!(coerce_stock(" 3 "), 3);
        assert_eq!(coerce_stock("0"), 0);
    }

    #[test]
    fn truncates_fractional_entries() {
        assert_eq!(coerce_stock("12.9"), 12);
    }

    #[test]
    fn coerces_garbage_and_negatives_to_zero() {
        assert_eq!(coerce_stock("abc"), 0);
        assert_eq!(coerce_stock(""), 0);
        assert_eq!(coerce_stock("-4"), 0);
    }
}
