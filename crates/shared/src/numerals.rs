//! Locale numeral handling for coordinate columns.
//!
//! Spreadsheets edited with an Arabic locale export coordinates such as
//! `٥٠٫٦١٥` instead of `50.615`. Only the characters below are translated;
//! everything else passes through so that `str::parse` decides validity.

/// U+066B ARABIC DECIMAL SEPARATOR.
pub const ARABIC_DECIMAL_SEPARATOR: char = '\u{066B}';

fn translate(c: char) -> char {
    match c {
        // Arabic-Indic digits
        '\u{0660}'..='\u{0669}' => char::from_digit(c as u32 - 0x0660, 10).unwrap_or(c),
        // Extended Arabic-Indic (Persian/Urdu) digits
        '\u{06F0}'..='\u{06F9}' => char::from_digit(c as u32 - 0x06F0, 10).unwrap_or(c),
        ARABIC_DECIMAL_SEPARATOR | ',' => '.',
        // U+066C (thousands separator) is left as is and fails the parse
        other => other,
    }
}

/// Translate native-script digits and decimal separators to ASCII.
pub fn normalize_numerals(value: &str) -> String {
    value.chars().map(translate).collect()
}

/// Parse a coordinate cell. Empty, non-numeric and non-finite cells are `None`.
pub fn parse_coordinate(value: &str) -> Option<f64> {
    let normalized = normalize_numerals(value.trim());
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_indic_digits() {
        assert_eq!(normalize_numerals("٠١٢٣٤٥٦٧٨٩"), "0123456789");
    }

    #[test]
    fn test_extended_arabic_indic_digits() {
        assert_eq!(normalize_numerals("۰۱۲۳۴۵۶۷۸۹"), "0123456789");
    }

    #[test]
    fn test_decimal_separators() {
        assert_eq!(normalize_numerals("50٫615"), "50.615");
        assert_eq!(normalize_numerals("50,615"), "50.615");
    }

    #[test]
    fn test_thousands_separator_rejected() {
        assert_eq!(normalize_numerals("١٬٠٠٠"), "1\u{066C}000");
        assert_eq!(parse_coordinate("٥٠٬٦١٥"), None);
    }

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(normalize_numerals("-12.5e3"), "-12.5e3");
        assert_eq!(normalize_numerals("abc"), "abc");
    }

    #[test]
    fn test_native_coordinate_matches_ascii() {
        let native = parse_coordinate("٥٠٫٦١٥").unwrap();
        let ascii = parse_coordinate("50.615").unwrap();
        assert_eq!(native, ascii);
        assert_eq!(native, 50.615);
    }

    #[test]
    fn test_mixed_script_coordinate() {
        assert_eq!(parse_coordinate("8٦.4٥9"), Some(86.459));
    }

    #[test]
    fn test_parse_coordinate_trims() {
        assert_eq!(parse_coordinate("  90.0 "), Some(90.0));
    }

    #[test]
    fn test_parse_coordinate_rejects_invalid() {
        assert_eq!(parse_coordinate(""), None);
        assert_eq!(parse_coordinate("   "), None);
        assert_eq!(parse_coordinate("north"), None);
        assert_eq!(parse_coordinate("12.3.4"), None);
        assert_eq!(parse_coordinate("inf"), None);
        assert_eq!(parse_coordinate("NaN"), None);
    }
}
