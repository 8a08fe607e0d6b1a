//! Strength labels and their UI lookups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Color used when a label is not recognized.
pub const UNKNOWN_COLOR: &str = "#6b7280";

/// Display text used when a label is not recognized.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Categorical strength derived from a 0-100 score.
///
/// Variants are ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Maps a score onto its label.
    ///
    /// `< 20` weak, `< 40` fair, `< 60` good, `< 80` strong, otherwise very strong.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => StrengthLabel::Weak,
            20..=39 => StrengthLabel::Fair,
            40..=59 => StrengthLabel::Good,
            60..=79 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    /// Machine name, as used in serialized reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "weak",
            StrengthLabel::Fair => "fair",
            StrengthLabel::Good => "good",
            StrengthLabel::Strong => "strong",
            StrengthLabel::VeryStrong => "very-strong",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "#ef4444",
            StrengthLabel::Fair => "#f97316",
            StrengthLabel::Good => "#eab308",
            StrengthLabel::Strong => "#22c55e",
            StrengthLabel::VeryStrong => "#16a34a",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the five label names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown strength label: {0}")]
pub struct UnknownStrengthLabel(pub String);

impl FromStr for StrengthLabel {
    type Err = UnknownStrengthLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weak" => Ok(StrengthLabel::Weak),
            "fair" => Ok(StrengthLabel::Fair),
            "good" => Ok(StrengthLabel::Good),
            "strong" => Ok(StrengthLabel::Strong),
            "very-strong" => Ok(StrengthLabel::VeryStrong),
            other => Err(UnknownStrengthLabel(other.to_string())),
        }
    }
}

/// Returns the meter color for a label name, or neutral gray if unrecognized.
///
/// # Example
///
/// ```rust
/// use partner_portal_core::strength_color;
///
/// assert_eq!(strength_color("strong"), "#22c55e");
/// assert_eq!(strength_color("excellent"), "#6b7280");
/// ```
pub fn strength_color(label: &str) -> &'static str {
    label
        .parse::<StrengthLabel>()
        .map(|l| l.color())
        .unwrap_or(UNKNOWN_COLOR)
}

/// Returns the display text for a label name, or `"Unknown"` if unrecognized.
pub fn strength_label(label: &str) -> &'static str {
    label
        .parse::<StrengthLabel>()
        .map(|l| l.display_label())
        .unwrap_or(UNKNOWN_LABEL)
}
