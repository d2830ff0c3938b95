//! The payroll registry.
//!
//! This module provides the [`PayrollRegistry`] type, an insertion-ordered
//! collection of uniquely named work types.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::calculation::calculate_average_pay;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{BonusStrategy, Listing, MAX_BONUS_PERCENT, WorkType, WorkTypeSummary};

/// Names longer than this many characters are accepted with a warning.
pub const LONG_NAME_THRESHOLD: usize = 50;

/// An ordered registry of work types with unique names.
///
/// Entries are only ever appended. A failed operation leaves the registry
/// exactly as it was.
///
/// # Example
///
/// ```
/// use payroll_registry::registry::PayrollRegistry;
/// use rust_decimal::Decimal;
///
/// let mut registry = PayrollRegistry::new();
/// registry.add_work_type("Plumbing", Decimal::from(100), Decimal::ZERO)?;
/// registry.add_work_type("Wiring", Decimal::from(200), Decimal::from(50))?;
///
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.calculate_average_pay()?, Decimal::from(200));
/// # Ok::<(), payroll_registry::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayrollRegistry {
    work_types: Vec<WorkType>,
}

impl PayrollRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a work type with a percentage bonus.
    ///
    /// A `bonus_percent` of exactly zero binds [`BonusStrategy::NoBonus`];
    /// anything else must lie in `(0, 100]`.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::DuplicateWorkType`] if `name` is already registered
    /// - [`PayrollError::InvalidRate`] if the bonus percent, name, or base
    ///   pay is out of range
    pub fn add_work_type(
        &mut self,
        name: &str,
        base_pay: Decimal,
        bonus_percent: Decimal,
    ) -> PayrollResult<()> {
        let name_length = name.chars().count();
        if name_length > LONG_NAME_THRESHOLD {
            warn!(
                name = %name,
                length = name_length,
                "Work type name is very long"
            );
        }

        if self.contains(name) {
            warn!(name = %name, "Rejected duplicate work type");
            return Err(PayrollError::DuplicateWorkType {
                name: name.to_string(),
            });
        }

        let strategy = if bonus_percent.is_zero() {
            BonusStrategy::no_bonus()
        } else {
            if bonus_percent > MAX_BONUS_PERCENT {
                return Err(PayrollError::invalid_rate("bonus percent cannot exceed 100%"));
            }
            BonusStrategy::percentage(bonus_percent)?
        };

        let work_type = WorkType::new(name, base_pay, Some(strategy))?;
        info!(
            name = %work_type.name(),
            base_pay = %work_type.base_pay(),
            final_pay = %work_type.final_pay(),
            entries = self.work_types.len() + 1,
            "Work type added"
        );
        self.work_types.push(work_type);

        Ok(())
    }

    /// Adds a work type that pays its base pay unchanged.
    pub fn add_work_type_without_bonus(
        &mut self,
        name: &str,
        base_pay: Decimal,
    ) -> PayrollResult<()> {
        self.add_work_type(name, base_pay, Decimal::ZERO)
    }

    /// Returns the mean final pay across every registered work type.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::EmptyWorkList`] if the registry is empty.
    pub fn calculate_average_pay(&self) -> PayrollResult<Decimal> {
        let average = calculate_average_pay(&self.work_types)?;
        debug!(
            entries = self.work_types.len(),
            average = %average,
            "Average pay calculated"
        );
        Ok(average)
    }

    /// Lists every work type in insertion order.
    pub fn list_all(&self) -> Listing {
        Listing::from_summaries(self.work_types.iter().map(WorkTypeSummary::from).collect())
    }

    /// Returns true if a work type named exactly `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the work type named exactly `name`.
    pub fn get(&self, name: &str) -> Option<&WorkType> {
        self.work_types.iter().find(|w| w.name() == name)
    }

    /// Iterates over the work types in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &WorkType> {
        self.work_types.iter()
    }

    /// Returns the number of registered work types.
    pub fn len(&self) -> usize {
        self.work_types.len()
    }

    /// Returns true if no work types are registered.
    pub fn is_empty(&self) -> bool {
        self.work_types.is_empty()
    }
}
