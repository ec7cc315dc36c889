//! Field-level validation failures

use thiserror::Error;

/// Why a field value was rejected
///
/// The `Display` text is what the user sees next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Password must be exactly {len} characters")]
    PasswordLengthMismatch { len: usize },
    #[error("Phone is required")]
    PhoneRequired,
    #[error("Invalid phone")]
    InvalidPhone,
    #[error("Birth date is required")]
    BirthDateRequired,
    #[error("Invalid birth date")]
    InvalidBirthDate,
    #[error("Birth date does not exist")]
    NonexistentBirthDate,
    #[error("Birth date cannot be in the future")]
    FutureBirthDate,
    #[error("Minimum age is {min} years")]
    BelowMinimumAge { min: u32 },
    #[error("Select a gender")]
    GenderRequired,
    #[error("Comment exceeds the {max} character limit")]
    CommentTooLong { max: usize },
    #[error("You must accept the terms")]
    TermsNotAccepted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_limits() {
        assert_eq!(
            FieldError::PasswordTooShort { min: 6 }.to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            FieldError::BelowMinimumAge { min: 13 }.to_string(),
            "Minimum age is 13 years"
        );
        assert_eq!(
            FieldError::CommentTooLong { max: 250 }.to_string(),
            "Comment exceeds the 250 character limit"
        );
    }
}
