//! Parsing of raw console input.
//!
//! These checks are presentation-level: they decide whether to re-prompt.
//! The registry validates the parsed values again on its own.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{MAX_BASE_PAY, MAX_BONUS_PERCENT};

/// Why a line of input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The line was blank.
    #[error("Error: the value cannot be empty. Try again.")]
    Empty,

    /// A menu choice contained something other than digits.
    #[error("Error: enter a whole number without letters or other symbols.")]
    NotWholeNumber,

    /// A menu choice was outside the offered range.
    #[error("Error: the number must be between {low} and {high}.")]
    ChoiceOutOfRange {
        /// Smallest valid choice.
        low: u32,
        /// Largest valid choice.
        high: u32,
    },

    /// An amount was not a plain decimal number.
    #[error("Error: enter a number using '.' as the decimal separator.")]
    NotDecimal,

    /// An amount had to be strictly positive.
    #[error("Error: enter a number greater than 0.")]
    NotPositive,

    /// An amount had to be zero or more.
    #[error("Error: enter a non-negative number.")]
    Negative,

    /// An amount exceeded its upper bound.
    #[error("Error: enter a number no greater than {max}.")]
    TooLarge {
        /// The inclusive upper bound.
        max: Decimal,
    },
}

/// Parses a menu choice in `low..=high`.
///
/// # Examples
///
/// ```
/// use payroll_registry::shell::parse_menu_choice;
///
/// assert_eq!(parse_menu_choice(" 2 ", 0, 3), Ok(2));
/// assert!(parse_menu_choice("2a", 0, 3).is_err());
/// assert!(parse_menu_choice("7", 0, 3).is_err());
/// ```
pub fn parse_menu_choice(line: &str, low: u32, high: u32) -> Result<u32, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::ChoiceOutOfRange { low, high });
    }
    if !line.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::NotWholeNumber);
    }

    match line.parse::<u32>() {
        Ok(choice) if (low..=high).contains(&choice) => Ok(choice),
        _ => Err(InputError::ChoiceOutOfRange { low, high }),
    }
}

/// Parses a work type name, trimming surrounding whitespace.
pub fn parse_name(line: &str) -> Result<String, InputError> {
    let name = line.trim();
    if name.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(name.to_string())
}

/// Returns true if `s` is digits with at most one `.`, and not just `.`.
pub fn is_plain_decimal(s: &str) -> bool {
    if s.is_empty() || s == "." {
        return false;
    }

    let mut seen_point = false;
    for c in s.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}

/// Parses an unsigned plain decimal such as `12`, `12.5`, `.5`, or `12.`.
pub fn parse_decimal(line: &str) -> Result<Decimal, InputError> {
    let text = line.trim();
    if !is_plain_decimal(text) {
        return Err(InputError::NotDecimal);
    }

    let text = text.strip_suffix('.').unwrap_or(text);
    let normalized = if text.starts_with('.') {
        format!("0{text}")
    } else {
        text.to_string()
    };

    Decimal::from_str(&normalized).map_err(|_| InputError::NotDecimal)
}

/// Parses a base pay in `(0, 1_000_000]`.
///
/// # Examples
///
/// ```
/// use payroll_registry::shell::parse_base_pay;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_base_pay("1000000"), Ok(Decimal::from(1_000_000)));
/// assert!(parse_base_pay("0").is_err());
/// assert!(parse_base_pay("-5").is_err());
/// ```
pub fn parse_base_pay(line: &str) -> Result<Decimal, InputError> {
    let amount = parse_decimal(line)?;
    if amount <= Decimal::ZERO {
        return Err(InputError::NotPositive);
    }
    if amount > MAX_BASE_PAY {
        return Err(InputError::TooLarge { max: MAX_BASE_PAY });
    }
    Ok(amount)
}

/// Parses a bonus percent in `[0, 100]`.
pub fn parse_bonus_percent(line: &str) -> Result<Decimal, InputError> {
    let percent = parse_decimal(line)?;
    if percent < Decimal::ZERO {
        return Err(InputError::Negative);
    }
    if percent > MAX_BONUS_PERCENT {
        return Err(InputError::TooLarge {
            max: MAX_BONUS_PERCENT,
        });
    }
    Ok(percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_menu_choice_accepts_range() {
        for choice in 0..=3 {
            assert_eq!(parse_menu_choice(&choice.to_string(), 0, 3), Ok(choice));
        }
    }

    #[test]
    fn test_menu_choice_trims_whitespace() {
        assert_eq!(parse_menu_choice("  1\n", 0, 3), Ok(1));
    }

    #[test]
    fn test_menu_choice_rejects_symbols() {
        assert_eq!(parse_menu_choice("-1", 0, 3), Err(InputError::NotWholeNumber));
        assert_eq!(parse_menu_choice("1.0", 0, 3), Err(InputError::NotWholeNumber));
        assert_eq!(parse_menu_choice("one", 0, 3), Err(InputError::NotWholeNumber));
    }

    #[test]
    fn test_menu_choice_rejects_out_of_range() {
        let expected = Err(InputError::ChoiceOutOfRange { low: 0, high: 3 });
        assert_eq!(parse_menu_choice("4", 0, 3), expected);
        assert_eq!(parse_menu_choice("", 0, 3), expected);
        assert_eq!(parse_menu_choice("99999999999999999999", 0, 3), expected);
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(parse_name("  Welding \t\r\n"), Ok("Welding".to_string()));
        assert_eq!(parse_name(" \t "), Err(InputError::Empty));
    }

    #[test]
    fn test_plain_decimal_shapes() {
        assert!(is_plain_decimal("12"));
        assert!(is_plain_decimal("12.50"));
        assert!(is_plain_decimal(".5"));
        assert!(is_plain_decimal("5."));
        assert!(!is_plain_decimal(""));
        assert!(!is_plain_decimal("."));
        assert!(!is_plain_decimal("1.2.3"));
        assert!(!is_plain_decimal("-5"));
        assert!(!is_plain_decimal("1e3"));
        assert!(!is_plain_decimal("12,5"));
    }

    #[test]
    fn test_parse_decimal_edge_shapes() {
        assert_eq!(parse_decimal(".5"), Ok(dec("0.5")));
        assert_eq!(parse_decimal("5."), Ok(dec("5")));
        assert_eq!(parse_decimal(" 42.25 "), Ok(dec("42.25")));
        assert_eq!(parse_decimal("abc"), Err(InputError::NotDecimal));
    }

    #[test]
    fn test_base_pay_bounds() {
        assert_eq!(parse_base_pay("0"), Err(InputError::NotPositive));
        assert_eq!(parse_base_pay("0.00"), Err(InputError::NotPositive));
        assert_eq!(parse_base_pay("-5"), Err(InputError::NotDecimal));
        assert_eq!(
            parse_base_pay("1000001"),
            Err(InputError::TooLarge { max: MAX_BASE_PAY })
        );
        assert_eq!(parse_base_pay("1000000"), Ok(dec("1000000")));
        assert_eq!(parse_base_pay("0.01"), Ok(dec("0.01")));
    }

    #[test]
    fn test_bonus_percent_bounds() {
        assert_eq!(parse_bonus_percent("0"), Ok(Decimal::ZERO));
        assert_eq!(parse_bonus_percent("100"), Ok(dec("100")));
        assert_eq!(
            parse_bonus_percent("100.0001"),
            Err(InputError::TooLarge {
                max: MAX_BONUS_PERCENT
            })
        );
        assert_eq!(parse_bonus_percent("-1"), Err(InputError::NotDecimal));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InputError::ChoiceOutOfRange { low: 0, high: 3 }.to_string(),
            "Error: the number must be between 0 and 3."
        );
        assert_eq!(
            InputError::TooLarge { max: MAX_BASE_PAY }.to_string(),
            "Error: enter a number no greater than 1000000."
        );
    }
}
