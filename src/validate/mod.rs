//! Form-field validation rules
//!
//! This module collects the field-level acceptance rules from the labs'
//! form layer:
//! - Email address validation
//! - Password complexity rules
//! - Username rules

pub mod email;
pub mod password;

pub use email::is_valid_email;
pub use password::{validate_password, validate_username, PasswordError, UsernameError};
