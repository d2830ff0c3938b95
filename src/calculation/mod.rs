//! Calculation logic for the payroll registry.
//!
//! This module contains the aggregate statistics computed over registered
//! work types.

mod average_pay;

pub use average_pay::{calculate_average_pay, total_final_pay};
