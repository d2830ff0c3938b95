//! Work type model.
//!
//! A [`WorkType`] is an immutable record: its invariants are checked once in
//! [`WorkType::new`] and nothing can change it afterwards.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

use super::BonusStrategy;

/// The largest accepted base pay (inclusive).
pub const MAX_BASE_PAY: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// A named kind of paid work with a base pay and a bound bonus strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkType {
    name: String,
    base_pay: Decimal,
    bonus_strategy: BonusStrategy,
}

impl WorkType {
    /// Creates a work type after validating its fields.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidRate`] when the name is empty, when
    /// `base_pay` is not in `(0, 1_000_000]`, or when no strategy is given.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_registry::models::{BonusStrategy, WorkType};
    /// use rust_decimal::Decimal;
    ///
    /// let work_type = WorkType::new(
    ///     "Bricklaying",
    ///     Decimal::from(200),
    ///     Some(BonusStrategy::percentage(Decimal::from(50)).unwrap()),
    /// )
    /// .unwrap();
    /// assert_eq!(work_type.final_pay(), Decimal::from(300));
    ///
    /// let unpaid = WorkType::new("Bricklaying", Decimal::ZERO, Some(BonusStrategy::no_bonus()));
    /// assert!(unpaid.is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        base_pay: Decimal,
        bonus_strategy: Option<BonusStrategy>,
    ) -> PayrollResult<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(PayrollError::invalid_rate("work type name must not be empty"));
        }
        if base_pay <= Decimal::ZERO {
            return Err(PayrollError::invalid_rate("base pay must be > 0"));
        }
        if base_pay > MAX_BASE_PAY {
            return Err(PayrollError::invalid_rate("base pay cannot exceed 1,000,000"));
        }
        let bonus_strategy = bonus_strategy
            .ok_or_else(|| PayrollError::invalid_rate("bonus strategy must not be null"))?;

        Ok(Self {
            name,
            base_pay,
            bonus_strategy,
        })
    }

    /// Returns the work type's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the pay before any bonus.
    pub fn base_pay(&self) -> Decimal {
        self.base_pay
    }

    /// Returns the bound bonus strategy.
    pub fn bonus_strategy(&self) -> &BonusStrategy {
        &self.bonus_strategy
    }

    /// Computes the pay after applying the bonus strategy.
    pub fn final_pay(&self) -> Decimal {
        self.bonus_strategy.compute(self.base_pay)
    }
}
