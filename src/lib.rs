//! Partner portal core library
//!
//! This library provides the logic behind the partner portal: password
//! strength evaluation for registration forms, resolution of an
//! authenticated caller to a partner company, and partner session tokens.
//!
//! # Features
//!
//! - `async` (default): Enables sending evaluation reports over a tokio channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PARTNER_JWT_SECRET`: Token signing secret (required)
//! - `PARTNER_JWT_ISSUER`: Token issuer (default: `partner-portal`)
//! - `PARTNER_JWT_AUDIENCE`: Token audience (default: `partner-portal`)
//! - `PARTNER_JWT_EXPIRATION_HOURS`: Token lifetime (default: `168`)
//!
//! # Example
//!
//! ```rust
//! use partner_portal_core::{evaluate_password_strength, strength_label};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("ValidPassword123!".to_string().into());
//! let report = evaluate_password_strength(&password);
//!
//! assert!(report.is_valid);
//! println!("Score: {}", report.score);
//! println!("Strength: {}", strength_label(report.strength.as_str()));
//! ```

// Internal modules
mod config;
mod evaluator;
mod identity;
mod jwt;
mod sections;
mod strength;

// Public API
pub use config::{ConfigError, PortalConfig};
pub use evaluator::{
    PasswordRequirements, PasswordStrengthReport, evaluate_password, evaluate_password_strength,
};
pub use identity::{
    IdentityError, InMemoryDirectory, PartnerAssociation, PartnerDirectory,
    resolve_partner_company_id, resolve_with_directory,
};
pub use jwt::{PartnerClaims, PartnerIdentity, PartnerTokenService, TokenError};
pub use sections::{MIN_LENGTH, SPECIAL_CHARS};
pub use strength::{
    StrengthLabel, UNKNOWN_COLOR, UNKNOWN_LABEL, UnknownStrengthLabel, strength_color,
    strength_label,
};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
