//! Partner session tokens
//!
//! HS256 JWTs issued to partner users after login and verified on every
//! authenticated portal request.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::PortalConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token creation error: {0}")]
    Creation(String),
    #[error("Token expired")]
    Expired,
    #[error("Invalid token: {0}")]
    Invalid(String),
}

/// Who a token is issued to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerIdentity {
    /// Set for accounts linked through the OAuth portal.
    pub user_id: Option<i64>,
    pub email: String,
    /// Set once the caller has been resolved to a partner company.
    pub partner_company_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerClaims {
    pub sub: String, // Subject (partner user email)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_company_id: Option<i64>,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

impl PartnerClaims {
    pub fn identity(&self) -> PartnerIdentity {
        PartnerIdentity {
            user_id: self.user_id,
            email: self.email.clone(),
            partner_company_id: self.partner_company_id,
        }
    }
}

pub struct PartnerTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    expiration_hours: u64,
}

impl PartnerTokenService {
    pub fn new(config: &PortalConfig) -> Self {
        let secret = config.jwt_secret.expose_secret().as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            expiration_hours: config.jwt_expiration_hours,
        }
    }

    /// Create a signed token for a partner user
    pub fn issue_token(&self, identity: &PartnerIdentity) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = i64::try_from(self.expiration_hours)
            .ok()
            .and_then(TimeDelta::try_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                TokenError::Creation(format!(
                    "token lifetime out of range: {} hours",
                    self.expiration_hours
                ))
            })?;

        let claims = PartnerClaims {
            sub: identity.email.clone(),
            user_id: identity.user_id,
            email: identity.email.clone(),
            partner_company_id: identity.partner_company_id,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        self.sign(&claims)
    }

    /// Verify a token and return its claims
    pub fn verify_token(&self, token: &str) -> Result<PartnerClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let token_data = decode::<PartnerClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::debug!("Partner token rejected: {}", e);

                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }

    fn sign(&self, claims: &PartnerClaims) -> Result<String, TokenError> {
        let token = encode(&Header::default(), claims, &self.encoding_key).map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to sign partner token: {}", e);
            TokenError::Creation(e.to_string())
        })?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Partner token issued, expires at {}", claims.exp);

        Ok(token)
    }
}
