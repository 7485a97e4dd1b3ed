//! Number formatting for KPI cards, chart labels and tooltips (en-US style)

/// Format a number with a comma thousands separator and the given number of decimals
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    // "-0" after rounding is printed as "0"
    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Whole-dollar currency, e.g. "$1,234,568"
pub fn format_usd(value: f64) -> String {
    let number = format_number_with_decimals(value, 0);
    match number.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None if value.is_finite() => format!("${}", number),
        None => number,
    }
}

/// Integer with thousands separator
pub fn format_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Percentage with one decimal, e.g. "10.0%"
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    format!("{}%", format_number_with_decimals(value, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-1234567.0, 0), "-1,234,567");
    }

    #[test]
    fn test_negative_zero_is_unsigned() {
        assert_eq!(format_number_with_decimals(-0.01, 1), "0.0");
        assert_eq!(format_int(-0.2), "0");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(1234567.89), "$1,234,568");
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(-1234.0), "-$1,234");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_usd(f64::NAN), "—");
        assert_eq!(format_percent(f64::INFINITY), "n/a");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(10.0), "10.0%");
        assert_eq!(format_percent(33.333), "33.3%");
    }
}
