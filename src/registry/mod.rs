//! Work type registry for a payroll session.

mod payroll_registry;

pub use payroll_registry::{LONG_NAME_THRESHOLD, PayrollRegistry};
