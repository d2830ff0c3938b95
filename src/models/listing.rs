//! Read-only views over registered work types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::WorkType;

/// The name, base pay, and final pay of one registered work type.
///
/// # Example
///
/// ```
/// use payroll_registry::models::WorkTypeSummary;
/// use rust_decimal::Decimal;
///
/// let summary = WorkTypeSummary {
///     name: "Carpentry".to_string(),
///     base_pay: Decimal::from(100),
///     final_pay: Decimal::from(110),
/// };
/// assert!(summary.final_pay > summary.base_pay);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTypeSummary {
    /// The work type's name.
    pub name: String,
    /// The pay before any bonus.
    pub base_pay: Decimal,
    /// The pay after the bonus strategy.
    pub final_pay: Decimal,
}

impl From<&WorkType> for WorkTypeSummary {
    fn from(work_type: &WorkType) -> Self {
        Self {
            name: work_type.name().to_string(),
            base_pay: work_type.base_pay(),
            final_pay: work_type.final_pay(),
        }
    }
}

/// The result of listing a registry.
///
/// An empty registry is reported as [`Listing::Empty`] rather than as an
/// error or an empty vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// The registry holds no work types.
    Empty,
    /// Summaries of every work type, in insertion order. Never empty.
    Entries(Vec<WorkTypeSummary>),
}

impl Listing {
    /// Builds a listing from summaries, collapsing no summaries to [`Listing::Empty`].
    pub fn from_summaries(summaries: Vec<WorkTypeSummary>) -> Self {
        if summaries.is_empty() {
            Self::Empty
        } else {
            Self::Entries(summaries)
        }
    }

    /// Returns true if the listing has no entries.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the summaries, an empty slice for [`Listing::Empty`].
    pub fn entries(&self) -> &[WorkTypeSummary] {
        match self {
            Self::Empty => &[],
            Self::Entries(entries) => entries,
        }
    }
}
