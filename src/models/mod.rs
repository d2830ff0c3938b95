//! Core data models for the payroll registry.
//!
//! This module contains the bonus strategies, the work type record, and the
//! listing views built from registered work types.

mod bonus_strategy;
mod listing;
mod work_type;

pub use bonus_strategy::{BonusPercent, BonusStrategy, MAX_BONUS_PERCENT};
pub use listing::{Listing, WorkTypeSummary};
pub use work_type::{MAX_BASE_PAY, WorkType};
