//! Character variety sections - uppercase, lowercase, numbers, special chars.
//!
//! Only ASCII ranges count for letters and digits. Non-ASCII characters
//! never satisfy any class.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Characters accepted by the special character requirement.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

fn contains_any(password: &SecretString, pred: impl Fn(char) -> bool) -> bool {
    password.expose_secret().chars().any(pred)
}

pub fn uppercase_section(password: &SecretString) -> SectionResult {
    if !contains_any(password, |c| c.is_ascii_uppercase()) {
        return Some("Password must contain at least one uppercase letter".to_string());
    }
    None
}

pub fn lowercase_section(password: &SecretString) -> SectionResult {
    if !contains_any(password, |c| c.is_ascii_lowercase()) {
        return Some("Password must contain at least one lowercase letter".to_string());
    }
    None
}

pub fn number_section(password: &SecretString) -> SectionResult {
    if !contains_any(password, |c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number".to_string());
    }
    None
}

pub fn special_char_section(password: &SecretString) -> SectionResult {
    if !contains_any(password, |c| SPECIAL_CHARS.contains(c)) {
        return Some("Password must contain at least one special character".to_string());
    }
    None
}
