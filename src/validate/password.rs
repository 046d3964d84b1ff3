//! Password and username complexity rules
//!
//! Mirrors the user-administration form rules: passwords are 8-128
//! characters with at least one uppercase letter, one lowercase letter,
//! and one digit, drawn from a fixed set of letters, digits, and
//! punctuation (Latin and Cyrillic letters both count). Usernames are
//! at least 5 ASCII alphanumeric characters.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref HAS_UPPERCASE: Regex = Regex::new(r"[A-ZА-Я]").unwrap();
    static ref HAS_LOWERCASE: Regex = Regex::new(r"[a-zа-я]").unwrap();
    static ref HAS_DIGIT: Regex = Regex::new(r"[0-9]").unwrap();
    static ref FORBIDDEN_CHAR: Regex =
        Regex::new(r#"[^\w~!?@#$%^&*_\-+()\[\]{}></\\|"'.,:;]"#).unwrap();
}

/// Password rule violations, one variant per rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("password must be 8-128 characters long")]
    BadLength,

    #[error("password must contain at least one uppercase letter")]
    NoUppercase,

    #[error("password must contain at least one lowercase letter")]
    NoLowercase,

    #[error("password must contain at least one digit")]
    NoDigit,

    #[error("password contains invalid characters")]
    InvalidChars,
}

/// Username rule violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("username must be at least 5 characters long")]
    TooShort,

    #[error("username can only contain letters and numbers")]
    InvalidChars,
}

/// Check a password against the complexity rules.
///
/// Rules are checked in order and the first violation is returned.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    let len = password.chars().count();
    if !(8..=128).contains(&len) {
        return Err(PasswordError::BadLength);
    }
    if !HAS_UPPERCASE.is_match(password) {
        return Err(PasswordError::NoUppercase);
    }
    if !HAS_LOWERCASE.is_match(password) {
        return Err(PasswordError::NoLowercase);
    }
    if !HAS_DIGIT.is_match(password) {
        return Err(PasswordError::NoDigit);
    }
    if FORBIDDEN_CHAR.is_match(password) {
        return Err(PasswordError::InvalidChars);
    }
    Ok(())
}

/// Check a username: at least 5 characters, ASCII letters and digits only.
pub fn validate_username(username: &str) -> Result<(), UsernameError> {
    if username.chars().count() < 5 {
        return Err(UsernameError::TooShort);
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(UsernameError::InvalidChars);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_passwords() {
        assert_eq!(validate_password("Passw0rd"), Ok(()));
        assert_eq!(validate_password("C0mplex!Pass"), Ok(()));
        assert_eq!(validate_password("Пароль123x"), Ok(()));
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(validate_password("Sh0rt"), Err(PasswordError::BadLength));
        let long = format!("A1{}", "a".repeat(127));
        assert_eq!(validate_password(&long), Err(PasswordError::BadLength));
        // exactly 8 and 128 are accepted
        assert_eq!(validate_password("Abcdef12"), Ok(()));
        let max = format!("A1{}", "a".repeat(126));
        assert_eq!(validate_password(&max), Ok(()));
    }

    #[test]
    fn test_missing_character_classes() {
        assert_eq!(
            validate_password("lowercase1"),
            Err(PasswordError::NoUppercase)
        );
        assert_eq!(
            validate_password("UPPERCASE1"),
            Err(PasswordError::NoLowercase)
        );
        assert_eq!(validate_password("NoDigitsHere"), Err(PasswordError::NoDigit));
    }

    #[test]
    fn test_cyrillic_classes_count() {
        assert_eq!(validate_password("пароль12"), Err(PasswordError::NoUppercase));
        assert_eq!(validate_password("Пароль12"), Ok(()));
    }

    #[test]
    fn test_forbidden_characters() {
        assert_eq!(
            validate_password("Passw0rd "),
            Err(PasswordError::InvalidChars)
        );
        assert_eq!(
            validate_password("Passw0rd€"),
            Err(PasswordError::InvalidChars)
        );
        // punctuation from the allowed set passes
        assert_eq!(validate_password("Passw0rd!?#"), Ok(()));
    }

    #[test]
    fn test_usernames() {
        assert_eq!(validate_username("user1"), Ok(()));
        assert_eq!(validate_username("usr"), Err(UsernameError::TooShort));
        assert_eq!(validate_username("user name"), Err(UsernameError::InvalidChars));
        assert_eq!(validate_username("user-1"), Err(UsernameError::InvalidChars));
    }
}
