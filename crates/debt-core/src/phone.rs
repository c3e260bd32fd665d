//! Vietnamese mobile number validation.
//!
//! Runs before any network call: numbers that cannot belong to a
//! Vietnamese mobile subscriber are rejected locally.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// A phone number failed the format check.
#[derive(Debug, Error)]
#[error("invalid phone number: {0}")]
pub struct PhoneError(pub String);

/// Leading `0` or `+84`, a valid mobile prefix, then the remaining
/// seven digits in 3/3/3- or 4/3/3-style groups with optional space
/// or dot separators.
const PHONE_PATTERN: &str = r"^(0|\+84)(\s|\.)?((3[2-9])|(5[689])|(7[06-9])|(8[1-689])|(9[0-46-9]))(\d)(\s|\.)?(\d{3})(\s|\.)?(\d{3})$";

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"))
}

/// Whether the string is a well-formed Vietnamese mobile number.
pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

/// Validate a phone number, returning a typed error for the
/// interaction boundary to surface.
pub fn validate_phone(phone: &str) -> Result<(), PhoneError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(PhoneError(phone.to_string()))
    }
}
