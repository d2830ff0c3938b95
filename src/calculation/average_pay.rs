//! Average pay calculation.
//!
//! The mean is returned unrounded; rounding for display is left to the
//! caller.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::WorkType;

/// Sums the final pay of every work type.
pub fn total_final_pay(work_types: &[WorkType]) -> Decimal {
    work_types.iter().map(WorkType::final_pay).sum()
}

/// Calculates the arithmetic mean of final pay across `work_types`.
///
/// # Errors
///
/// Returns [`PayrollError::EmptyWorkList`] when `work_types` is empty.
///
/// # Examples
///
/// ```
/// use payroll_registry::calculation::calculate_average_pay;
/// use payroll_registry::models::{BonusStrategy, WorkType};
/// use rust_decimal::Decimal;
///
/// let work_types = vec![
///     WorkType::new("Sanding", Decimal::from(100), Some(BonusStrategy::no_bonus())).unwrap(),
///     WorkType::new(
///         "Varnishing",
///         Decimal::from(200),
///         Some(BonusStrategy::percentage(Decimal::from(50)).unwrap()),
///     )
///     .unwrap(),
/// ];
///
/// assert_eq!(calculate_average_pay(&work_types).unwrap(), Decimal::from(200));
/// assert!(calculate_average_pay(&[]).is_err());
/// ```
pub fn calculate_average_pay(work_types: &[WorkType]) -> PayrollResult<Decimal> {
    if work_types.is_empty() {
        return Err(PayrollError::EmptyWorkList {
            message: "cannot calculate average".to_string(),
        });
    }

    Ok(total_final_pay(work_types) / Decimal::from(work_types.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BonusStrategy;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn work_type(name: &str, base_pay: &str, bonus_percent: &str) -> WorkType {
        let strategy = if bonus_percent == "0" {
            BonusStrategy::no_bonus()
        } else {
            BonusStrategy::percentage(dec(bonus_percent)).unwrap()
        };
        WorkType::new(name, dec(base_pay), Some(strategy)).unwrap()
    }

    #[test]
    fn test_empty_list_fails() {
        match calculate_average_pay(&[]) {
            Err(PayrollError::EmptyWorkList { message }) => {
                assert_eq!(message, "cannot calculate average");
            }
            other => panic!("Expected EmptyWorkList error, got {:?}", other),
        }
    }

    #[test]
    fn test_single_entry_average_is_its_final_pay() {
        let work_types = vec![work_type("Sanding", "80", "25")];
        assert_eq!(calculate_average_pay(&work_types).unwrap(), dec("100"));
    }

    #[test]
    fn test_average_uses_final_pay() {
        let work_types = vec![
            work_type("Sanding", "100", "0"),
            work_type("Varnishing", "200", "50"),
        ];
        assert_eq!(calculate_average_pay(&work_types).unwrap(), dec("200"));
    }

    #[test]
    fn test_average_is_not_rounded() {
        let work_types = vec![
            work_type("A", "1", "0"),
            work_type("B", "1", "0"),
            work_type("C", "2", "0"),
        ];
        let average = calculate_average_pay(&work_types).unwrap();
        assert_eq!(average, dec("4") / dec("3"));
        assert!(average.scale() > 2);
    }

    #[test]
    fn test_total_final_pay() {
        let work_types = vec![work_type("A", "10.50", "0"), work_type("B", "20", "10")];
        assert_eq!(total_final_pay(&work_types), dec("32.50"));
        assert_eq!(total_final_pay(&[]), Decimal::ZERO);
    }
}
