//! Contact number normalization
//!
//! Best-effort canonicalization of the configured WhatsApp number into a
//! dialable digit string. This is a heuristic, not a validator: no length
//! or checksum checks are performed.

/// Lebanon country calling code
const COUNTRY_CODE: &str = "961";

/// Normalize a raw contact number into `961…` digit form
///
/// 1. Strip every non-digit character.
/// 2. Drop a leading international `00` prefix.
/// 3. Accept an existing `961` prefix as-is.
/// 4. Otherwise drop a single leading trunk `0`, then prepend `961`.
///
/// Degenerate input (nothing left after stripping) yields `"961"` rather
/// than an error.
pub fn normalize(raw: &str) -> String {
    let all_digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut digits = all_digits.as_str();

    if let Some(rest) = digits.strip_prefix("00") {
        digits = rest;
    }

    if digits.starts_with(COUNTRY_CODE) {
        return digits.to_string();
    }

    let local = digits.strip_prefix('0').unwrap_or(digits);
    format!("{COUNTRY_CODE}{local}")
}
