//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Formats a price in dollars.
///
/// Usage in templates: `{{ item.price|usd }}`
#[askama::filter_fn]
pub fn usd(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("${value:.2}"))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    #[test]
    fn test_usd_pads_to_two_decimals() {
        let price = Decimal::from_str("4.5").unwrap();
        assert_eq!(format!("${price:.2}"), "$4.50");

        let price = Decimal::from_str("12").unwrap();
        assert_eq!(format!("${price:.2}"), "$12.00");
    }
}
