//! Footer copyright year.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use crate::dom::{ElementHandle, Page, require_id};
use crate::error::MountError;

pub const YEAR_ID: &str = "year";

/// Write `year` into the page's `#year` element.
///
/// # Errors
///
/// Returns [`MountError`] if there is no `#year` element.
pub fn stamp_year<P: Page>(page: &P, year: u32) -> Result<(), MountError> {
    let el = require_id(page, "footer year", YEAR_ID)?;
    el.set_text(&year.to_string());
    Ok(())
}

#[cfg(feature = "hydrate")]
#[must_use]
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
