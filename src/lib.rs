//! Payroll department registry.
//!
//! This crate keeps an in-memory registry of named work types, each with a
//! base pay and a bonus strategy, and computes listings and the average
//! final pay over them. An interactive console shell drives the registry.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod registry;
pub mod shell;
