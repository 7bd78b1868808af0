/// Formats a price as Turkish lira, e.g. `₺2.499,00`.
///
/// Missing or non-finite prices have no rendering.
pub fn format_price(price: Option<f64>) -> Option<String> {
    let price = price.filter(|p| p.is_finite())?;
    let cents = (price.abs() * 100.0).round() as u64;
    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };

    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    Some(format!("{sign}₺{grouped},{:02}", cents % 100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_price(Some(2499.0)).as_deref(), Some("₺2.499,00"));
        assert_eq!(format_price(Some(1234567.5)).as_deref(), Some("₺1.234.567,50"));
        assert_eq!(format_price(Some(999.0)).as_deref(), Some("₺999,00"));
    }

    #[test]
    fn rounds_to_kurus() {
        assert_eq!(format_price(Some(0.005)).as_deref(), Some("₺0,01"));
        assert_eq!(format_price(Some(-12.3)).as_deref(), Some("-₺12,30"));
    }

    #[test]
    fn missing_price_has_no_rendering() {
        assert_eq!(format_price(None), None);
        assert_eq!(format_price(Some(f64::NAN)), None);
    }
}
