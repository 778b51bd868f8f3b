//! Display formatting for award amounts

/// Round to whole units and group thousands with commas
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    // inf/NaN have nothing to group
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return rounded;
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0" after rounding a small negative
    if grouped == "0" {
        return grouped;
    }
    format!("{}{}", sign, grouped)
}

/// Rounded amount followed by a currency unit, e.g. `"170,446,201 KRW"`
pub fn format_currency(value: f64, unit: &str) -> String {
    format!("{} {}", format_amount(value), unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.4), "999");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(11_685.862158178372), "11,686");
        assert_eq!(format_amount(170_446_200.94047663), "170,446,201");
        assert_eq!(format_amount(1_234_567_890.0), "1,234,567,890");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_amount(-1_234_567.0), "-1,234,567");
        assert_eq!(format_amount(-0.2), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_amount(f64::INFINITY), "inf");
        assert_eq!(format_amount(f64::NAN), "NaN");
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(5_842.931079089186, "KRW"), "5,843 KRW");
    }
}
