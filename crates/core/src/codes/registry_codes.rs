//! Suggested codes for new locations and categories.

use std::sync::LazyLock;

use regex::Regex;

use crate::assets::{Category, Location};

/// Step between consecutive category codes (10, 20, 30, ...)
pub const CATEGORY_CODE_STEP: u32 = 10;

static TRAILING_DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)$").expect("Invalid regex pattern"));

static NUMERIC_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)$").expect("Invalid regex pattern"));

/// Next location code: highest trailing number across existing codes plus
/// one, padded to 3 digits. `RD001` and `001` both count as 1.
pub fn next_location_code(existing: &[Location]) -> String {
    let max = existing
        .iter()
        .filter_map(|location| captured_number(&TRAILING_DIGITS_REGEX, &location.code))
        .max()
        .unwrap_or(0);
    format!("{:03}", max.saturating_add(1))
}

/// Next category code: highest purely numeric code plus 10, or `"10"`
/// when there is none.
pub fn next_category_code(existing: &[Category]) -> String {
    let max = existing
        .iter()
        .filter_map(|category| captured_number(&NUMERIC_CODE_REGEX, &category.code))
        .max()
        .unwrap_or(0);
    max.saturating_add(CATEGORY_CODE_STEP).to_string()
}

fn captured_number(regex: &Regex, code: &str) -> Option<u32> {
    regex
        .captures(code.trim())
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .filter(|n| *n > 0)
}
