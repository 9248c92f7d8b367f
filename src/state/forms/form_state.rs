//! Form controller: focus, per-field errors and submit gating

use super::field::{Choice, FormField};
use crate::validation::{
    validate_login, validate_registration, FieldErrors, Gender, LoginCredentials, LoginInput,
    Registration, RegistrationInput, Validation,
};

/// Errors from the last submit attempt plus how many attempts were made
#[derive(Debug, Clone, Default)]
pub struct FormStatus {
    pub errors: FieldErrors,
    pub submit_count: u32,
}

/// Trait for common form operations.
///
/// Indices run over the fields in display order followed by one extra
/// index for the buttons row.
pub trait Form {
    /// Typed record produced by a successful submit
    type Output;

    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField>;
    fn status(&self) -> &FormStatus;
    fn status_mut(&mut self) -> &mut FormStatus;

    /// Run the form's schema over the current values
    fn validate(&self) -> Validation<Self::Output>;

    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.blur_active();
        self.set_active_field((current + 1) % count);
    }

    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.blur_active();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }

    fn blur_active(&mut self) {
        let current = self.active_field();
        if let Some(field) = self.get_field_mut(current) {
            field.blur();
        }
    }

    /// The focused field, `None` while the buttons row is focused
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let current = self.active_field();
        self.get_field_mut(current)
    }

    fn is_buttons_row_active(&self) -> bool {
        self.active_field() + 1 == self.field_count()
    }

    fn errors(&self) -> &FieldErrors {
        &self.status().errors
    }

    /// Error message to show under the named field
    fn error_for(&self, name: &str) -> Option<&str> {
        self.status().errors.get(name)
    }

    /// Validate once against the full current state.
    ///
    /// On success the stored errors are cleared and the typed record is
    /// returned for the caller to act on. On failure the errors are stored
    /// for display and `None` is returned.
    fn submit(&mut self) -> Option<Self::Output> {
        let result = self.validate();
        let status = self.status_mut();
        status.submit_count += 1;
        match result {
            Ok(record) => {
                status.errors.clear();
                Some(record)
            }
            Err(errors) => {
                status.errors = errors;
                None
            }
        }
    }
}

// Login Form
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username: FormField,
    pub password: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Sign In, 1=Sign Up)
    pub selected_button: usize,
    pub status: FormStatus,
}

impl LoginForm {
    pub const BUTTONS: [&'static str; 2] = ["Sign In", "Sign Up"];

    pub fn new() -> Self {
        Self {
            username: FormField::text("username", "Username"),
            password: FormField::secret("password", "Password"),
            active_field_index: 0,
            selected_button: 0,
            status: FormStatus::default(),
        }
    }

    pub fn input(&self) -> LoginInput {
        LoginInput {
            username: self.username.as_text().to_string(),
            password: self.password.as_text().to_string(),
        }
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % Self::BUTTONS.len();
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    type Output = LoginCredentials;

    fn field_count(&self) -> usize {
        3 // username, password, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.username),
            1 => Some(&self.password),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.username),
            1 => Some(&mut self.password),
            _ => None,
        }
    }
    fn status(&self) -> &FormStatus {
        &self.status
    }
    fn status_mut(&mut self) -> &mut FormStatus {
        &mut self.status
    }
    fn validate(&self) -> Validation<LoginCredentials> {
        validate_login(&self.input())
    }
}

/// Radio choices for the gender field
pub const GENDER_CHOICES: [Choice; 3] = [
    Choice {
        value: Gender::Male.as_str(),
        label: Gender::Male.label(),
    },
    Choice {
        value: Gender::Female.as_str(),
        label: Gender::Female.label(),
    },
    Choice {
        value: Gender::Other.as_str(),
        label: Gender::Other.label(),
    },
];

// Registration Form
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub gender: FormField,
    pub mobile: FormField,
    pub email: FormField,
    pub country: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub terms: FormField,
    pub active_field_index: usize,
    pub status: FormStatus,
}

impl RegisterForm {
    /// Index of the buttons row
    const BUTTONS_ROW: usize = 9;

    pub fn new() -> Self {
        Self {
            first_name: FormField::text("first_name", "First Name"),
            last_name: FormField::text("last_name", "Last Name"),
            gender: FormField::radio(
                "gender",
                "Gender",
                &GENDER_CHOICES,
                Gender::default().as_str(),
            ),
            mobile: FormField::text("mobile", "Phone Number"),
            email: FormField::text("email", "Email"),
            country: FormField::dropdown("country", "Country"),
            password: FormField::secret("password", "Password"),
            confirm_password: FormField::text("confirm_password", "Confirm Password"),
            terms: FormField::checkbox("terms", "Agree with Terms & Conditions"),
            active_field_index: 0,
            status: FormStatus::default(),
        }
    }

    pub fn input(&self) -> RegistrationInput {
        RegistrationInput {
            first_name: self.first_name.as_text().to_string(),
            last_name: self.last_name.as_text().to_string(),
            gender: self.gender.as_text().to_string(),
            mobile: self.mobile.as_text().to_string(),
            email: self.email.as_text().to_string(),
            country: self.country.as_text().to_string(),
            password: self.password.as_text().to_string(),
            confirm_password: self.confirm_password.as_text().to_string(),
            terms: self.terms.as_flag(),
        }
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegisterForm {
    type Output = Registration;

    fn field_count(&self) -> usize {
        Self::BUTTONS_ROW + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.first_name),
            1 => Some(&self.last_name),
            2 => Some(&self.gender),
            3 => Some(&self.mobile),
            4 => Some(&self.email),
            5 => Some(&self.country),
            6 => Some(&self.password),
            7 => Some(&self.confirm_password),
            8 => Some(&self.terms),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.first_name),
            1 => Some(&mut self.last_name),
            2 => Some(&mut self.gender),
            3 => Some(&mut self.mobile),
            4 => Some(&mut self.email),
            5 => Some(&mut self.country),
            6 => Some(&mut self.password),
            7 => Some(&mut self.confirm_password),
            8 => Some(&mut self.terms),
            _ => None,
        }
    }
    fn status(&self) -> &FormStatus {
        &self.status
    }
    fn status_mut(&mut self) -> &mut FormStatus {
        &mut self.status
    }
    fn validate(&self) -> Validation<Registration> {
        validate_registration(&self.input())
    }
}
