use crate::config::CurrencyFormat;

/// Format an amount as currency, e.g. `$1,250.00`.
pub fn format_price(amount: f64, currency: &CurrencyFormat) -> String {
    let digits = format!("{:.*}", currency.decimals as usize, amount.abs());
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let is_zero = digits.chars().all(|c| c == '0' || c == '.');
    let mut output = String::new();
    if amount < 0.0 && !is_zero {
        output.push('-');
    }
    output.push_str(&currency.symbol);
    output.push_str(&group_thousands(integer, &currency.thousands_separator));
    if let Some(fraction) = fraction {
        output.push_str(&currency.decimal_separator);
        output.push_str(fraction);
    }
    output
}

fn group_thousands(integer: &str, separator: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        let currency = CurrencyFormat::default();
        assert_eq!(format_price(1250.0, &currency), "$1,250.00");
        assert_eq!(format_price(0.5, &currency), "$0.50");
        assert_eq!(format_price(1234567.891, &currency), "$1,234,567.89");
    }

    #[test]
    fn test_negative_and_negative_zero() {
        let currency = CurrencyFormat::default();
        assert_eq!(format_price(-90.0, &currency), "-$90.00");
        assert_eq!(format_price(-0.001, &currency), "$0.00");
    }

    #[test]
    fn test_custom_separators_without_decimals() {
        let currency = CurrencyFormat {
            symbol: "COP ".to_string(),
            decimals: 0,
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
        };
        assert_eq!(format_price(450000.0, &currency), "COP 450.000");
        assert_eq!(format_price(999.0, &currency), "COP 999");
    }
}
