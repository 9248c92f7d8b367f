//! Registration form schema

use super::{
    check, Accepted, EmailShape, FieldErrors, Length, OneOf, PasswordStrength, Required,
    RuleViolation, Validation, Validator,
};

/// Gender choices offered by the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];
    const VALUES: [&'static str; 3] = ["male", "female", "other"];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value)
    }
}

/// Raw registration field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationInput {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub mobile: String,
    pub email: String,
    pub country: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
}

impl Default for RegistrationInput {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            gender: Gender::default().as_str().to_string(),
            mobile: String::new(),
            email: String::new(),
            country: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            terms: false,
        }
    }
}

/// A registration record that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub mobile: String,
    pub email: String,
    pub country: String,
    pub password: String,
}

fn password_message(violation: &RuleViolation) -> &'static str {
    match violation {
        RuleViolation::TooShort { .. } => "Password must be at least 8 characters",
        RuleViolation::TooLong { .. } => "Password must be at most 30 characters",
        _ => "Password must include uppercase, lowercase, number and special character (-!@#$%^&*+)",
    }
}

/// Validate a registration record.
///
/// Every field is checked on its own; the password confirmation is compared
/// only once both password fields pass their own rules, and a mismatch is
/// reported on `confirm_password`.
pub fn validate_registration(input: &RegistrationInput) -> Validation<Registration> {
    let mut errors = FieldErrors::new();

    check(&mut errors, "first_name", &input.first_name, &[&Required], |_| {
        "First name is required"
    });
    check(&mut errors, "last_name", &input.last_name, &[&Required], |_| {
        "Last name is required"
    });
    check(
        &mut errors,
        "gender",
        &input.gender,
        &[&OneOf(&Gender::VALUES)],
        |_| "Gender is required",
    );
    check(&mut errors, "mobile", &input.mobile, &[&Required], |_| {
        "Mobile number is required"
    });
    check(&mut errors, "email", &input.email, &[&EmailShape], |_| {
        "Email address is required"
    });
    check(&mut errors, "country", &input.country, &[&Required], |_| {
        "Country is required"
    });
    let password_ok = check(
        &mut errors,
        "password",
        &input.password,
        &[&Length { min: 8, max: 30 }, &PasswordStrength],
        password_message,
    );
    let confirm_ok = check(
        &mut errors,
        "confirm_password",
        &input.confirm_password,
        &[&Required],
        |_| "Confirm password is required",
    );
    if Accepted.validate(&input.terms).is_err() {
        errors.insert("terms", "You must agree with Terms & Conditions");
    }

    if password_ok && confirm_ok && input.password != input.confirm_password {
        errors.insert("confirm_password", "Passwords do not match");
    }

    errors.into_result(|| Registration {
        first_name: input.first_name.clone(),
        last_name: input.last_name.clone(),
        gender: Gender::from_value(&input.gender).unwrap_or_default(),
        mobile: input.mobile.clone(),
        email: input.email.clone(),
        country: input.country.clone(),
        password: input.password.clone(),
    })
}
