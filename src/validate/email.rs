//! Email address validation
//!
//! Accepts `user@website.extension` where the user part may contain
//! letters, digits, underscores, and hyphens, the website part is
//! alphanumeric, and the extension is 1-3 letters.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9_-]+@[A-Za-z0-9]+\.[A-Za-z]{1,3}$").unwrap();
}

/// Check whether an email address is acceptable
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_addresses() {
        assert!(is_valid_email("lara@mospolytech.ru"));
        assert!(is_valid_email("brian-23@mospolytech.ru"));
        assert!(is_valid_email("britts_54@mospolytech.ru"));
    }

    #[test]
    fn test_missing_parts() {
        assert!(!is_valid_email("invalid@"));
        assert!(!is_valid_email("@mospolytech.ru"));
        assert!(!is_valid_email("test@domain"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_dot_not_allowed_in_user_part() {
        assert!(!is_valid_email("test.email@domain.com"));
    }

    #[test]
    fn test_extension_too_long() {
        assert!(!is_valid_email("test@domain.toolongextension"));
    }
}
