//! Portal configuration
//!
//! Token settings are read from the environment once at startup.

use secrecy::SecretString;
use thiserror::Error;

pub const JWT_SECRET_VAR: &str = "PARTNER_JWT_SECRET";
pub const JWT_ISSUER_VAR: &str = "PARTNER_JWT_ISSUER";
pub const JWT_AUDIENCE_VAR: &str = "PARTNER_JWT_AUDIENCE";
pub const JWT_EXPIRATION_HOURS_VAR: &str = "PARTNER_JWT_EXPIRATION_HOURS";

pub const DEFAULT_ISSUER: &str = "partner-portal";
pub const DEFAULT_AUDIENCE: &str = "partner-portal";
/// Seven days.
pub const DEFAULT_EXPIRATION_HOURS: u64 = 168;
/// One hundred years.
pub const MAX_EXPIRATION_HOURS: u64 = 8760 * 100;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required environment variable not set: {0}")]
    MissingVar(&'static str),
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug)]
pub struct PortalConfig {
    pub jwt_secret: SecretString,
    pub jwt_issuer: String,
    pub jwt_audience: String,
    pub jwt_expiration_hours: u64,
}

impl PortalConfig {
    /// Builds a configuration with default issuer, audience and lifetime.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: SecretString::new(jwt_secret.into().into()),
            jwt_issuer: DEFAULT_ISSUER.to_string(),
            jwt_audience: DEFAULT_AUDIENCE.to_string(),
            jwt_expiration_hours: DEFAULT_EXPIRATION_HOURS,
        }
    }

    /// Reads the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PARTNER_JWT_SECRET` (required, non-empty)
    /// - `PARTNER_JWT_ISSUER` (default: `partner-portal`)
    /// - `PARTNER_JWT_AUDIENCE` (default: `partner-portal`)
    /// - `PARTNER_JWT_EXPIRATION_HOURS` (default: `168`)
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The secret is missing or empty
    /// - The lifetime is not a positive integer of at most `MAX_EXPIRATION_HOURS`
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var(JWT_SECRET_VAR)
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingVar(JWT_SECRET_VAR))?;

        let mut config = Self::new(secret);

        if let Some(issuer) = var_or_default(JWT_ISSUER_VAR) {
            config.jwt_issuer = issuer;
        }
        if let Some(audience) = var_or_default(JWT_AUDIENCE_VAR) {
            config.jwt_audience = audience;
        }
        if let Some(raw) = var_or_default(JWT_EXPIRATION_HOURS_VAR) {
            config.jwt_expiration_hours = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|h| (1..=MAX_EXPIRATION_HOURS).contains(h))
                .ok_or(ConfigError::InvalidValue {
                    name: JWT_EXPIRATION_HOURS_VAR,
                    value: raw,
                })?;
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Portal config loaded: issuer={} audience={} expiration_hours={}",
            config.jwt_issuer,
            config.jwt_audience,
            config.jwt_expiration_hours
        );

        Ok(config)
    }
}

/// Returns the variable's value, or `None` if unset or empty.
fn var_or_default(name: &'static str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => {
            #[cfg(feature = "tracing")]
            tracing::debug!("{} not set, using default", name);
            None
        }
    }
}
