//! Interactive console shell for the payroll registry.
//!
//! The shell reads menu choices and field values, re-prompts on malformed
//! input, calls the registry, and renders results and payroll errors.

mod input;
mod menu;
mod render;
mod session;

pub use input::{
    InputError, is_plain_decimal, parse_base_pay, parse_bonus_percent, parse_decimal,
    parse_menu_choice, parse_name,
};
pub use menu::MenuChoice;
pub use render::{render_average, render_error, render_listing, render_menu};
pub use session::Session;
