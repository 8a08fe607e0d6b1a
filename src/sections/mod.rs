//! Password requirement sections
//!
//! Each section checks one base requirement of the password policy.

mod length;
mod variety;

pub use length::{MIN_LENGTH, length_section};
pub use variety::{
    SPECIAL_CHARS, lowercase_section, number_section, special_char_section, uppercase_section,
};

/// Result type for section check functions.
/// - `Some(feedback)` - Requirement not met, with the message to show
/// - `None` - Requirement met
pub type SectionResult = Option<String>;
