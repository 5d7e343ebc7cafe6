// ── Input validation boundary ──
//
// Form-level checks the admin console performs before a mutation is
// submitted. Enforced here at the store edge as well, so invalid input
// can never reach a collection.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Maximum site name length after trimming.
pub const SITE_NAME_MAX_LEN: usize = 100;

/// `local@domain.tld` shape; no whitespace or extra `@` in any part.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Validate and normalize a site name. Returns the trimmed name.
pub fn site_name(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation("name", "site name must not be empty"));
    }
    if trimmed.chars().count() > SITE_NAME_MAX_LEN {
        return Err(CoreError::validation(
            "name",
            format!("site name must be at most {SITE_NAME_MAX_LEN} characters"),
        ));
    }
    Ok(trimmed.to_owned())
}

/// Validate and normalize an invite email. Returns the trimmed address.
pub fn email(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation("email", "email must not be empty"));
    }
    if !EMAIL_SHAPE.is_match(trimmed) {
        return Err(CoreError::validation(
            "email",
            format!("'{trimmed}' is not a valid email address"),
        ));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn site_name_is_trimmed() {
        assert_eq!(site_name("  Everland  ").unwrap(), "Everland");
    }

    #[test]
    fn empty_site_name_is_rejected() {
        assert!(site_name("").is_err());
        assert!(site_name("   ").is_err());
    }

    #[test]
    fn overlong_site_name_is_rejected() {
        let name = "x".repeat(SITE_NAME_MAX_LEN + 1);
        assert!(site_name(&name).is_err());
        assert!(site_name(&name[..SITE_NAME_MAX_LEN]).is_ok());
    }

    #[test]
    fn well_formed_email_passes() {
        assert_eq!(email("x@example.com").unwrap(), "x@example.com");
        assert_eq!(email("  op@guideon.io ").unwrap(), "op@guideon.io");
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in ["", "plain", "no@tld", "two@@example.com", "a b@example.com"] {
            assert!(email(bad).is_err(), "expected rejection: {bad:?}");
        }
    }
}
