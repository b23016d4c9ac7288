//! Registration input validation.
//!
//! The session store assumes its inputs were validated before the call;
//! these are the checks the registration form applies.

use thiserror::Error;

/// Name length bounds.
const NAME_MIN: usize = 20;
const NAME_MAX: usize = 60;
/// Password length bounds.
const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 16;
/// Maximum address length.
const ADDRESS_MAX: usize = 400;

/// A registration form submission, prior to validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub address: String,
}

/// Violations of the registration preconditions. Messages match the
/// inline form feedback shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must be at least 20 characters")]
    NameTooShort,
    #[error("Name must be at most 60 characters")]
    NameTooLong,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Password must be at most 16 characters")]
    PasswordTooLong,
    #[error("Password must include at least one uppercase letter and one special character")]
    PasswordTooWeak,
    #[error("Passwords must match")]
    PasswordMismatch,
    #[error("Address is required")]
    AddressRequired,
    #[error("Address must be at most 400 characters")]
    AddressTooLong,
}

/// Validate a full registration submission. Returns the first violation in
/// field order, mirroring how the form surfaces one error per field.
pub fn validate_registration(registration: &Registration) -> Result<(), ValidationError> {
    validate_name(&registration.name)?;
    validate_email(&registration.email)?;
    validate_password(&registration.password)?;
    if registration.password != registration.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    validate_address(&registration.address)?;
    Ok(())
}

/// Validate a display name: 20-60 characters.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if len < NAME_MIN {
        return Err(ValidationError::NameTooShort);
    }
    if len > NAME_MAX {
        return Err(ValidationError::NameTooLong);
    }
    Ok(())
}

/// Validate an email address shape: one `@` with a dotted domain after it.
/// Deliverability is not checked; there is no mail server to check against.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };
    let dotted = domain.split('.').filter(|part| !part.is_empty()).count() >= 2;
    if local.is_empty() || !dotted || domain.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate password strength: 8-16 characters with at least one uppercase
/// letter and one special character.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let len = password.chars().count();
    if len < PASSWORD_MIN {
        return Err(ValidationError::PasswordTooShort);
    }
    if len > PASSWORD_MAX {
        return Err(ValidationError::PasswordTooLong);
    }
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_symbol = password.chars().any(|c| "!@#$%^&*".contains(c));
    if !has_upper || !has_symbol {
        return Err(ValidationError::PasswordTooWeak);
    }
    Ok(())
}

/// Validate a postal address: non-empty, at most 400 characters.
pub fn validate_address(address: &str) -> Result<(), ValidationError> {
    if address.trim().is_empty() {
        return Err(ValidationError::AddressRequired);
    }
    if address.chars().count() > ADDRESS_MAX {
        return Err(ValidationError::AddressTooLong);
    }
    Ok(())
}
