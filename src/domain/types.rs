//! Shared value helpers used by domain input structs.
//!
//! Normalization happens once, at construction; values that reach the
//! repository layer are already trusted.

use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when constructing a domain value from raw input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided email domain was empty or contained '@' or whitespace.
    #[error("invalid email domain")]
    InvalidDomain,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided status is not part of the entity's closed status set.
    #[error("unknown status value: {0}")]
    UnknownStatus(String),
}

/// Lowercases, trims, and validates an email address.
pub fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Trims an email domain, preserving case. Lookups match domains exactly as
/// stored, so the same string must be supplied on create and query.
pub fn normalize_domain<S: Into<String>>(domain: S) -> Result<String, TypeConstraintError> {
    let trimmed = domain.into().trim().to_string();
    if trimmed.is_empty() || trimmed.contains('@') || trimmed.contains(char::is_whitespace) {
        Err(TypeConstraintError::InvalidDomain)
    } else {
        Ok(trimmed)
    }
}

/// Trims a required string, rejecting empty input.
pub fn require_non_empty<S: Into<String>>(value: S) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString)
    } else {
        Ok(trimmed)
    }
}

/// Trims an optional string, dropping it entirely when blank.
pub fn optional_trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_email_lowercases_and_trims() {
        assert_eq!(
            normalize_email("  John.Doe@Example.COM "),
            Ok("john.doe@example.com".to_string())
        );
    }

    #[test]
    fn normalize_email_rejects_garbage() {
        assert_eq!(
            normalize_email("not-an-email"),
            Err(TypeConstraintError::InvalidEmail)
        );
    }

    #[test]
    fn normalize_domain_preserves_case() {
        assert_eq!(normalize_domain(" Acme.com "), Ok("Acme.com".to_string()));
        assert_eq!(
            normalize_domain("user@acme.com"),
            Err(TypeConstraintError::InvalidDomain)
        );
        assert_eq!(normalize_domain("  "), Err(TypeConstraintError::InvalidDomain));
    }

    #[test]
    fn optional_trimmed_drops_blanks() {
        assert_eq!(optional_trimmed(Some("  ".into())), None);
        assert_eq!(optional_trimmed(Some(" x ".into())), Some("x".to_string()));
        assert_eq!(optional_trimmed(None), None);
    }
}
