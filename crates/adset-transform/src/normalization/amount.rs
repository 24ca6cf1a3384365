//! Brazilian-formatted currency amounts.
//!
//! Sale cells hold values such as `R$ 1.234,56`: an optional `R$` marker,
//! `.` grouping thousands, and `,` as the decimal separator.

const CURRENCY_MARKER: &str = "R$";

/// Parse a sale cell into an amount.
///
/// - Empty or blank cells are 0.
/// - Cells containing `;` are 0 (a field split went wrong upstream).
/// - `R$` and spaces are stripped, `.` is dropped, `,` becomes `.`.
/// - Anything that still isn't a finite number is 0.
///
/// Negative amounts are returned as parsed.
pub fn parse_amount(raw: &str) -> f64 {
    if raw.trim().is_empty() || raw.contains(';') {
        return 0.0;
    }

    let cleaned: String = raw
        .replace(CURRENCY_MARKER, "")
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | '.'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    match cleaned.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_with_thousands() {
        assert_eq!(parse_amount("R$ 1.234,56"), 1234.56);
        assert_eq!(parse_amount("R$1.000.000,00"), 1_000_000.0);
    }

    #[test]
    fn test_plain_decimal_comma() {
        assert_eq!(parse_amount("100,00"), 100.0);
        assert_eq!(parse_amount("0,5"), 0.5);
        assert_eq!(parse_amount("250"), 250.0);
    }

    #[test]
    fn test_dot_is_thousands_separator() {
        assert_eq!(parse_amount("1.500"), 1500.0);
        assert_eq!(parse_amount("12.34"), 1234.0);
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("\t\n"), 0.0);
    }

    #[test]
    fn test_semicolon_is_malformed() {
        assert_eq!(parse_amount("12;34"), 0.0);
        assert_eq!(parse_amount("R$ 10,00;R$ 20,00"), 0.0);
    }

    #[test]
    fn test_garbage() {
        assert_eq!(parse_amount("sim"), 0.0);
        assert_eq!(parse_amount("R$"), 0.0);
        assert_eq!(parse_amount("1,2,3"), 0.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("-infinity"), 0.0);
    }

    #[test]
    fn test_non_breaking_space() {
        assert_eq!(parse_amount("R$\u{a0}2.500,10"), 2500.1);
    }

    #[test]
    fn test_negative_passes_through() {
        assert_eq!(parse_amount("-10,00"), -10.0);
    }
}
