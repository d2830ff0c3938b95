//! Text rendering for the payroll shell.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{ListingFormat, MAX_DECIMAL_PLACES};
use crate::error::PayrollError;
use crate::models::Listing;

use super::MenuChoice;

/// Renders the main menu.
pub fn render_menu() -> String {
    let mut menu = String::from("\n===== PAYROLL DEPARTMENT MENU =====\n");
    for choice in MenuChoice::ALL {
        menu.push_str(&format!("{}. {}\n", choice.number(), choice.label()));
    }
    menu.push_str("===================================\n");
    menu
}

/// Renders a listing in the configured format.
pub fn render_listing(listing: &Listing, format: ListingFormat) -> serde_json::Result<String> {
    match format {
        ListingFormat::Json => {
            let mut json = serde_json::to_string_pretty(listing.entries())?;
            json.push('\n');
            Ok(json)
        }
        ListingFormat::Text => Ok(render_listing_text(listing)),
    }
}

fn render_listing_text(listing: &Listing) -> String {
    match listing {
        Listing::Empty => "The work type list is empty.\n".to_string(),
        Listing::Entries(entries) => {
            let mut text = String::from("Current work types:\n");
            for entry in entries {
                text.push_str(&format!(
                    "  - {} | base pay: {} | with bonus: {}\n",
                    entry.name,
                    entry.base_pay.normalize(),
                    entry.final_pay.normalize()
                ));
            }
            text
        }
    }
}

/// Renders the average pay rounded half away from zero to `decimal_places`,
/// capped at [`MAX_DECIMAL_PLACES`].
///
/// # Examples
///
/// ```
/// use payroll_registry::shell::render_average;
/// use rust_decimal::Decimal;
///
/// let average = Decimal::from(4) / Decimal::from(3);
/// assert_eq!(render_average(average, 2), "Average pay: 1.33\n");
/// assert_eq!(render_average(Decimal::from(200), 2), "Average pay: 200.00\n");
/// ```
pub fn render_average(average: Decimal, decimal_places: u32) -> String {
    let decimal_places = decimal_places.min(MAX_DECIMAL_PLACES);
    let rounded =
        average.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    format!("Average pay: {:.*}\n", decimal_places as usize, rounded)
}

/// Renders a rejected payroll operation.
pub fn render_error(error: &PayrollError) -> String {
    format!("Payroll error: {error}\n")
}
