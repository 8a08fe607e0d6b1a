//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::sections::{
    SectionResult, length_section, lowercase_section, number_section, special_char_section,
    uppercase_section,
};
use crate::strength::StrengthLabel;

const MAX_SCORE: u8 = 100;
const REQUIREMENT_POINTS: u8 = 20;
const LENGTH_BONUS_POINTS: u8 = 5;
const FIRST_BONUS_LENGTH: usize = 16;
const SECOND_BONUS_LENGTH: usize = 20;

/// Per-requirement breakdown of an evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRequirements {
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_numbers: bool,
    pub has_special_chars: bool,
}

impl PasswordRequirements {
    pub fn all_met(&self) -> bool {
        self.min_length
            && self.has_uppercase
            && self.has_lowercase
            && self.has_numbers
            && self.has_special_chars
    }

    #[cfg(test)]
    fn met_count(&self) -> usize {
        [
            self.min_length,
            self.has_uppercase,
            self.has_lowercase,
            self.has_numbers,
            self.has_special_chars,
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }
}

/// Result of evaluating a password against the policy.
///
/// `is_valid` holds exactly when every requirement is met, which is also
/// exactly when `feedback` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrengthReport {
    pub score: u8,
    pub strength: StrengthLabel,
    pub feedback: Vec<String>,
    pub is_valid: bool,
    pub requirements: PasswordRequirements,
}

#[derive(Clone, Copy)]
enum Requirement {
    MinLength,
    Uppercase,
    Lowercase,
    Numbers,
    SpecialChars,
}

impl Requirement {
    fn mark_met(self, requirements: &mut PasswordRequirements) {
        match self {
            Requirement::MinLength => requirements.min_length = true,
            Requirement::Uppercase => requirements.has_uppercase = true,
            Requirement::Lowercase => requirements.has_lowercase = true,
            Requirement::Numbers => requirements.has_numbers = true,
            Requirement::SpecialChars => requirements.has_special_chars = true,
        }
    }
}

fn add_points(score: u8, points: u8) -> u8 {
    score.saturating_add(points).min(MAX_SCORE)
}

/// Evaluates password strength and returns a detailed report.
///
/// Never fails: an empty password simply meets no requirement.
///
/// # Arguments
/// * `password` - The password to evaluate
pub fn evaluate_password_strength(password: &SecretString) -> PasswordStrengthReport {
    let mut feedback = Vec::new();
    let mut requirements = PasswordRequirements::default();
    let mut score = 0u8;

    #[cfg(feature = "tracing")]
    tracing::debug!("evaluating password strength");

    // Orchestrator: check order determines feedback order
    let sections: [(Requirement, fn(&SecretString) -> SectionResult); 5] = [
        (Requirement::MinLength, length_section),
        (Requirement::Uppercase, uppercase_section),
        (Requirement::Lowercase, lowercase_section),
        (Requirement::Numbers, number_section),
        (Requirement::SpecialChars, special_char_section),
    ];

    for (requirement, section_fn) in sections {
        match section_fn(password) {
            Some(reason) => feedback.push(reason),
            None => {
                requirement.mark_met(&mut requirements);
                score = add_points(score, REQUIREMENT_POINTS);
            }
        }
    }

    // Length bonuses, applied after all base checks
    let pwd_len = password.expose_secret().chars().count();
    if pwd_len >= FIRST_BONUS_LENGTH {
        score = add_points(score, LENGTH_BONUS_POINTS);
    }
    if pwd_len >= SECOND_BONUS_LENGTH {
        score = add_points(score, LENGTH_BONUS_POINTS);
    }

    let report = PasswordStrengthReport {
        score,
        strength: StrengthLabel::from_score(score),
        feedback,
        is_valid: requirements.all_met(),
        requirements,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password evaluated: score={} strength={} valid={}",
        report.score,
        report.strength,
        report.is_valid
    );

    report
}

/// Convenience wrapper for callers holding a plain string.
pub fn evaluate_password(password: &str) -> PasswordStrengthReport {
    evaluate_password_strength(&SecretString::new(password.to_string().into()))
}

/// Async version that sends the report via channel.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    tx: mpsc::Sender<PasswordStrengthReport>,
) {
    let report = evaluate_password_strength(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password strength report: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_short_password() {
        let report = evaluate_password("Short1!");

        assert!(!report.is_valid);
        assert!(!report.requirements.min_length);
        assert!(
            report
                .feedback
                .contains(&"Password must be at least 12 characters".to_string())
        );
        assert_eq!(report.score, 80);
        assert_eq!(report.strength, StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_evaluate_valid_password() {
        let report = evaluate_password("ValidPassword123!");

        assert!(report.is_valid);
        assert!(report.feedback.is_empty());
        assert_eq!(
            report.requirements,
            PasswordRequirements {
                min_length: true,
                has_uppercase: true,
                has_lowercase: true,
                has_numbers: true,
                has_special_chars: true,
            }
        );
        assert_eq!(report.requirements.met_count(), 5);
        // 17 chars: five requirements plus the first bonus
        assert_eq!(report.score, 100);
        assert_eq!(report.strength, StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_evaluate_empty_password() {
        let report = evaluate_password("");

        assert_eq!(report.score, 0);
        assert_eq!(report.strength, StrengthLabel::Weak);
        assert!(!report.is_valid);
        assert_eq!(report.requirements, PasswordRequirements::default());
        assert_eq!(report.requirements.met_count(), 0);
        assert_eq!(
            report.feedback,
            vec![
                "Password must be at least 12 characters",
                "Password must contain at least one uppercase letter",
                "Password must contain at least one lowercase letter",
                "Password must contain at least one number",
                "Password must contain at least one special character",
            ]
        );
    }

    #[test]
    fn test_feedback_follows_check_order() {
        // Missing uppercase and special only
        let report = evaluate_password("lowercase1234");
        assert_eq!(
            report.feedback,
            vec![
                "Password must contain at least one uppercase letter",
                "Password must contain at least one special character",
            ]
        );
        assert_eq!(report.score, 60);
        assert_eq!(report.strength, StrengthLabel::Strong);
    }

    #[test]
    fn test_short_passwords_never_valid() {
        for pwd in ["", "a", "Aa1!", "Abcdefgh1!", "Abcdefgh12!"] {
            let report = evaluate_password(pwd);
            assert!(!report.requirements.min_length, "{:?}", pwd);
            assert!(!report.is_valid, "{:?}", pwd);
        }
    }

    #[test]
    fn test_valid_iff_feedback_empty() {
        for pwd in [
            "",
            "Short1!",
            "alllowercase",
            "ALLUPPERCASE1!",
            "NoDigitsHere!!",
            "NoSpecials1234",
            "ValidPassword123!",
            "Another#Good1pass",
        ] {
            let report = evaluate_password(pwd);
            assert_eq!(report.is_valid, report.feedback.is_empty(), "{:?}", pwd);
            assert_eq!(report.is_valid, report.requirements.all_met(), "{:?}", pwd);
        }
    }

    #[test]
    fn test_score_monotonic_in_requirements_at_fixed_length() {
        // All 12 chars long, each adding one more character class
        let ladder = [
            "            ",
            "aaaaaaaaaaaa",
            "Aaaaaaaaaaaa",
            "Aaaaaaaaaaa1",
            "Aaaaaaaaaa1!",
        ];
        let scores: Vec<u8> = ladder.iter().map(|p| evaluate_password(p).score).collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]), "{:?}", scores);
        assert_eq!(scores, vec![20, 40, 60, 80, 100]);
    }

    #[test]
    fn test_length_bonuses() {
        // Only lowercase: 20 points plus bonuses
        assert_eq!(evaluate_password(&"a".repeat(11)).score, 20);
        assert_eq!(evaluate_password(&"a".repeat(15)).score, 40);
        assert_eq!(evaluate_password(&"a".repeat(16)).score, 45);
        assert_eq!(evaluate_password(&"a".repeat(19)).score, 45);
        assert_eq!(evaluate_password(&"a".repeat(20)).score, 50);
    }

    #[test]
    fn test_bonus_does_not_affect_validity() {
        let report = evaluate_password(&"a".repeat(24));
        assert!(!report.is_valid);
        assert_eq!(report.feedback.len(), 3);
    }

    #[test]
    fn test_score_clamped_at_100() {
        let report = evaluate_password("VeryLongValidPassword123!@#");
        assert_eq!(report.score, 100);
        assert!(report.is_valid);
    }

    #[test]
    fn test_non_ascii_letters_do_not_count() {
        let report = evaluate_password("ÄÖÜäöüßéèàç1!");
        assert!(report.requirements.min_length);
        assert!(!report.requirements.has_uppercase);
        assert!(!report.requirements.has_lowercase);
        assert!(report.requirements.has_numbers);
        assert!(report.requirements.has_special_chars);
        assert_eq!(report.score, 60);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = evaluate_password("ValidPassword123!");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["isValid"], true);
        assert_eq!(json["strength"], "very-strong");
        assert_eq!(json["requirements"]["hasSpecialChars"], true);
        assert_eq!(json["requirements"]["minLength"], true);
    }
}
