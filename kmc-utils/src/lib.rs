//! Shared utility functions for KMC crates.

/// Numeric text helpers
pub mod numbers {
    use crate::error::NumberError;

    /// True if the text holds nothing but whitespace.
    /// Blank input fields count as "not supplied".
    pub fn is_blank(text: &str) -> bool {
        text.trim().is_empty()
    }

    /// Parse a text field as a real number.
    ///
    /// Surrounding whitespace is ignored. Accepts the usual float forms
    /// ("21", "3.5", ".5", "1e3", "-2"), "inf" and "nan", and single
    /// underscores between digits ("1_000").
    pub fn parse_number(text: &str) -> Result<f64, NumberError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(NumberError(text.to_string()));
        }
        let digits =
            strip_digit_separators(trimmed).ok_or_else(|| NumberError(text.to_string()))?;
        digits
            .parse::<f64>()
            .map_err(|_| NumberError(text.to_string()))
    }

    /// Remove underscores that sit between two digits. `None` if any
    /// underscore is misplaced.
    fn strip_digit_separators(text: &str) -> Option<String> {
        let bytes = text.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            if *b != b'_' {
                continue;
            }
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            match (before, after) {
                (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {}
                _ => return None,
            }
        }
        Some(text.replace('_', ""))
    }

    /// Format a value with a fixed number of decimal places
    pub fn format_fixed(value: f64, places: usize) -> String {
        format!("{:.*}", places, value)
    }

    /// Format a weight as "735.00 lbs"
    pub fn format_pounds(value: f64) -> String {
        format!("{} lbs", format_fixed(value, 2))
    }

    /// Format a per-pound cost as "$2.88"
    pub fn format_dollars(value: f64) -> String {
        format!("${}", format_fixed(value, 2))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_is_blank() {
            assert!(is_blank(""));
            assert!(is_blank("   "));
            assert!(is_blank("\t\n"));
            assert!(!is_blank("0"));
            assert!(!is_blank(" 35 "));
        }

        #[test]
        fn test_parse_number() {
            assert_eq!(parse_number("21").unwrap(), 21.0);
            assert_eq!(parse_number("73.5").unwrap(), 73.5);
            assert_eq!(parse_number(" 3.5 ").unwrap(), 3.5);
            assert_eq!(parse_number(".5").unwrap(), 0.5);
            assert_eq!(parse_number("1e3").unwrap(), 1000.0);
            assert_eq!(parse_number("-2").unwrap(), -2.0);
            assert!(parse_number("inf").unwrap().is_infinite());
            assert!(parse_number("nan").unwrap().is_nan());
        }

        #[test]
        fn test_parse_number_rejects_garbage() {
            assert!(parse_number("").is_err());
            assert!(parse_number("  ").is_err());
            assert!(parse_number("abc").is_err());
            assert!(parse_number("12 lbs").is_err());
            assert!(parse_number("1,000").is_err());

            let err = parse_number("ten").unwrap_err();
            assert_eq!(err.0, "ten");
        }

        #[test]
        fn test_parse_number_digit_separators() {
            assert_eq!(parse_number("1_000").unwrap(), 1000.0);
            assert_eq!(parse_number("1_000.2_5").unwrap(), 1000.25);
            assert_eq!(parse_number("1e1_0").unwrap(), 1e10);
            assert!(parse_number("_1000").is_err());
            assert!(parse_number("1000_").is_err());
            assert!(parse_number("1__000").is_err());
            assert!(parse_number("1_.5").is_err());
            assert!(parse_number("1._5").is_err());
        }

        #[test]
        fn test_formatting() {
            assert_eq!(format_fixed(0.8586, 4), "0.8586");
            assert_eq!(format_fixed(0.0, 4), "0.0000");
            assert_eq!(format_pounds(735.0), "735.00 lbs");
            assert_eq!(format_pounds(1000.0000000000001), "1000.00 lbs");
            assert_eq!(format_dollars(2.880522), "$2.88");
            assert_eq!(format_dollars(0.0), "$0.00");
        }
    }
}

/// Error types
pub mod error {
    use std::fmt;

    /// Text that could not be read as a number. Holds the offending text.
    #[derive(Debug, Clone, PartialEq)]
    pub struct NumberError(pub String);

    impl fmt::Display for NumberError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Not a number: {:?}", self.0)
        }
    }

    impl std::error::Error for NumberError {}
}
