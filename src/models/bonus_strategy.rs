//! Bonus strategies applied on top of a work type's base pay.
//!
//! A strategy is validated once when it is constructed; computing pay from
//! it afterwards cannot fail.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// The largest bonus percentage a strategy accepts (inclusive).
pub const MAX_BONUS_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// A bonus percentage known to lie within `0..=100`.
///
/// # Example
///
/// ```
/// use payroll_registry::models::BonusPercent;
/// use rust_decimal::Decimal;
///
/// assert!(BonusPercent::new(Decimal::from(25)).is_ok());
/// assert!(BonusPercent::new(Decimal::from(101)).is_err());
/// assert!(BonusPercent::new(Decimal::from(-1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct BonusPercent(Decimal);

impl BonusPercent {
    /// Validates `percent` against the accepted range.
    pub fn new(percent: Decimal) -> PayrollResult<Self> {
        if percent < Decimal::ZERO {
            return Err(PayrollError::invalid_rate("bonus percent must be >= 0"));
        }
        if percent > MAX_BONUS_PERCENT {
            return Err(PayrollError::invalid_rate("bonus percent cannot exceed 100%"));
        }
        Ok(Self(percent))
    }

    /// Returns the percentage value.
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for BonusPercent {
    type Error = PayrollError;

    fn try_from(percent: Decimal) -> PayrollResult<Self> {
        Self::new(percent)
    }
}

impl From<BonusPercent> for Decimal {
    fn from(percent: BonusPercent) -> Self {
        percent.0
    }
}

/// How final pay is derived from base pay.
///
/// # Example
///
/// ```
/// use payroll_registry::models::BonusStrategy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let strategy = BonusStrategy::percentage(Decimal::from(50)).unwrap();
/// assert_eq!(strategy.compute(Decimal::from(200)), Decimal::from(300));
///
/// let flat = BonusStrategy::no_bonus();
/// let base_pay = Decimal::from_str("28.54").unwrap();
/// assert_eq!(flat.compute(base_pay), base_pay);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusStrategy {
    /// Final pay equals base pay.
    NoBonus,
    /// Final pay is base pay raised by a percentage.
    Percentage(BonusPercent),
}

impl BonusStrategy {
    /// Returns the strategy that pays base pay unchanged.
    pub fn no_bonus() -> Self {
        Self::NoBonus
    }

    /// Builds a percentage strategy, rejecting rates outside `0..=100`.
    pub fn percentage(percent: Decimal) -> PayrollResult<Self> {
        BonusPercent::new(percent).map(Self::Percentage)
    }

    /// Computes final pay from `base_pay`.
    pub fn compute(&self, base_pay: Decimal) -> Decimal {
        match self {
            Self::NoBonus => base_pay,
            Self::Percentage(percent) => {
                base_pay * (Decimal::ONE + percent.value() / Decimal::ONE_HUNDRED)
            }
        }
    }

    /// Returns the bonus percentage, zero for [`BonusStrategy::NoBonus`].
    pub fn bonus_percent(&self) -> Decimal {
        match self {
            Self::NoBonus => Decimal::ZERO,
            Self::Percentage(percent) => percent.value(),
        }
    }
}
