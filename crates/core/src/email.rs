//! Email address validation for account registration.
//!
//! The accepted shape is `local-part@domain.tld`: the local part may hold
//! ASCII letters, digits and `._%+-`; the domain is dot-separated labels
//! ending in a top-level label of at least two letters.

use std::sync::LazyLock;

use regex::Regex;

/// Regex pattern for an acceptable email address.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Return `true` when `email` matches [`EMAIL_PATTERN`].
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for email in [
            "jean@ferme.fr",
            "marie.dupont@agri.example.com",
            "a_b%c+d-e@x.io",
            "UPPER@DOMAIN.ORG",
        ] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(!is_valid_email("not-an-email"));
    }

    #[test]
    fn rejects_short_or_numeric_tld() {
        assert!(!is_valid_email("jean@ferme.f"));
        assert!(!is_valid_email("jean@ferme.12"));
    }

    #[test]
    fn rejects_missing_domain_dot() {
        assert!(!is_valid_email("jean@localhost"));
    }

    #[test]
    fn rejects_whitespace_and_empty_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@ferme.fr"));
        assert!(!is_valid_email("jean @ferme.fr"));
        assert!(!is_valid_email("jean@ferme.fr "));
    }
}
