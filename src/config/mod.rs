//! Configuration loading for the payroll shell.
//!
//! This module loads presentation settings from an optional YAML file.
//! Registry limits are not configurable.
//!
//! # Example
//!
//! ```no_run
//! use payroll_registry::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./payroll.yaml").unwrap();
//! println!("Listing format: {:?}", config.display.listing_format);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DisplayConfig, ListingFormat, MAX_DECIMAL_PLACES, ShellConfig};
