/// Formats a value for tick, total and tooltip labels.
///
/// Integral values render without a decimal part (`30`, not `30.0`),
/// fractional values with their minimal decimal form. Negative zero is
/// normalized to `0`.
#[must_use]
pub(super) fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_decimal_part() {
        assert_eq!(format_value(30.0), "30");
        assert_eq!(format_value(-12.0), "-12");
    }

    #[test]
    fn fractional_values_keep_minimal_decimals() {
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(0.25), "0.25");
    }

    #[test]
    fn negative_zero_normalizes_to_zero() {
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(0.0), "0");
    }
}
