//! Partner identity resolution
//!
//! Associates an authenticated caller with a partner company. A caller is
//! looked up by numeric user id first (OAuth-linked accounts) and by email
//! only when that yields nothing (accounts registered with email/password).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Link between a partner user and a partner company, as stored by the
/// partner user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerAssociation {
    pub partner_company_id: i64,
    pub user_id: Option<i64>,
    pub email: String,
    pub is_active: bool,
}

#[derive(Error, Debug)]
pub enum IdentityError<E = std::convert::Infallible> {
    /// No lookup path produced an association.
    #[error("caller is not associated with a partner company")]
    NotAssociated,
    /// The directory itself failed.
    #[error("partner directory lookup failed: {0}")]
    Directory(#[source] E),
}

impl<E> IdentityError<E> {
    pub fn is_not_associated(&self) -> bool {
        matches!(self, IdentityError::NotAssociated)
    }
}

/// Lookup source for partner associations.
///
/// Implementations decide ordering; index 0 of a result is treated as
/// authoritative and is never re-sorted.
pub trait PartnerDirectory {
    type Error;

    fn find_by_user_id(&self, user_id: i64) -> Result<Vec<PartnerAssociation>, Self::Error>;

    fn find_by_email(&self, email: &str) -> Result<Vec<PartnerAssociation>, Self::Error>;
}

fn non_empty(set: Option<&[PartnerAssociation]>) -> Option<&[PartnerAssociation]> {
    set.filter(|s| !s.is_empty())
}

fn has_email(email: Option<&str>) -> bool {
    email.is_some_and(|e| !e.is_empty())
}

/// Resolves the partner company id from pre-fetched lookup results.
///
/// The by-user-id result wins whenever it is non-empty. The by-email
/// result is only consulted when the by-user-id result is absent or empty
/// and an email is known.
///
/// # Errors
///
/// Returns `IdentityError::NotAssociated` if every path comes up empty.
///
/// # Example
///
/// ```rust
/// use partner_portal_core::{PartnerAssociation, resolve_partner_company_id};
///
/// let by_email = vec![PartnerAssociation {
///     partner_company_id: 7,
///     user_id: None,
///     email: "a@b.com".to_string(),
///     is_active: true,
/// }];
///
/// let id = resolve_partner_company_id(Some(&[]), Some(&by_email), Some("a@b.com")).unwrap();
/// assert_eq!(id, 7);
/// ```
pub fn resolve_partner_company_id(
    by_user_id: Option<&[PartnerAssociation]>,
    by_email: Option<&[PartnerAssociation]>,
    email: Option<&str>,
) -> Result<i64, IdentityError> {
    let mut candidates = non_empty(by_user_id);

    if candidates.is_none() && has_email(email) {
        #[cfg(feature = "tracing")]
        tracing::debug!("no association by user id, falling back to email");
        candidates = non_empty(by_email);
    }

    match candidates.and_then(|c| c.first()) {
        Some(association) => Ok(association.partner_company_id),
        None => {
            #[cfg(feature = "tracing")]
            tracing::info!("caller is not associated with a partner company");
            Err(IdentityError::NotAssociated)
        }
    }
}

/// Resolves the partner company id by querying a directory.
///
/// The by-user-id lookup runs only when `user_id` is known. The by-email
/// lookup runs only when the first lookup produced nothing and a non-empty
/// email is known. Directory errors are returned unchanged inside
/// `IdentityError::Directory`.
pub fn resolve_with_directory<D: PartnerDirectory>(
    directory: &D,
    user_id: Option<i64>,
    email: Option<&str>,
) -> Result<i64, IdentityError<D::Error>> {
    let by_user_id = match user_id {
        Some(id) => Some(
            directory
                .find_by_user_id(id)
                .map_err(IdentityError::Directory)?,
        ),
        None => None,
    };

    let by_email = match email {
        Some(e) if non_empty(by_user_id.as_deref()).is_none() && has_email(Some(e)) => Some(
            directory
                .find_by_email(e)
                .map_err(IdentityError::Directory)?,
        ),
        _ => None,
    };

    resolve_partner_company_id(by_user_id.as_deref(), by_email.as_deref(), email).map_err(
        |err| match err {
            IdentityError::NotAssociated => IdentityError::NotAssociated,
            IdentityError::Directory(never) => match never {},
        },
    )
}

/// In-memory directory keeping associations in insertion order.
///
/// User ids match exactly; emails match ignoring ASCII case.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    associations: Vec<PartnerAssociation>,
}

impl InMemoryDirectory {
    pub fn new(associations: Vec<PartnerAssociation>) -> Self {
        Self { associations }
    }

    pub fn insert(&mut self, association: PartnerAssociation) {
        self.associations.push(association);
    }

    pub fn len(&self) -> usize {
        self.associations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.associations.is_empty()
    }
}

impl PartnerDirectory for InMemoryDirectory {
    type Error = std::convert::Infallible;

    fn find_by_user_id(&self, user_id: i64) -> Result<Vec<PartnerAssociation>, Self::Error> {
        Ok(self
            .associations
            .iter()
            .filter(|a| a.user_id == Some(user_id))
            .cloned()
            .collect())
    }

    fn find_by_email(&self, email: &str) -> Result<Vec<PartnerAssociation>, Self::Error> {
        Ok(self
            .associations
            .iter()
            .filter(|a| a.email.eq_ignore_ascii_case(email))
            .cloned()
            .collect())
    }
}
