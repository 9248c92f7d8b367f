//! Login form schema

use super::{check, FieldErrors, Length, PasswordStrength, Required, RuleViolation, Validation};

/// Raw login field values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// A login record that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

fn password_message(violation: &RuleViolation) -> &'static str {
    match violation {
        RuleViolation::Empty => "Password is required",
        RuleViolation::TooShort { .. } => "Password must be at least 8 characters",
        RuleViolation::TooLong { .. } => "Password must be at most 30 characters",
        _ => "Password must contain at least one uppercase letter, one lowercase letter, one number, and one special character",
    }
}

/// Validate a login record
pub fn validate_login(input: &LoginInput) -> Validation<LoginCredentials> {
    let mut errors = FieldErrors::new();

    check(&mut errors, "username", input.username.as_str(), &[&Required], |_| {
        "Username is required"
    });
    check(
        &mut errors,
        "password",
        input.password.as_str(),
        &[&Required, &Length { min: 8, max: 30 }, &PasswordStrength],
        password_message,
    );

    errors.into_result(|| LoginCredentials {
        username: input.username.clone(),
        password: input.password.clone(),
    })
}
