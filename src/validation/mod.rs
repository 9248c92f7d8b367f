//! Form validation layer
//!
//! Each form has one statically typed validation function that takes the
//! candidate record and returns either the typed record or a map of
//! per-field error messages. Individual checks are small [`Validator`]
//! rules that the form schemas compose.

mod login;
mod registration;
mod rules;

pub use login::{validate_login, LoginCredentials, LoginInput};
pub use registration::{validate_registration, Gender, Registration, RegistrationInput};
pub use rules::{
    Accepted, EmailShape, Length, OneOf, PasswordStrength, Required, RuleViolation,
};

/// Core validation trait implemented by every rule.
///
/// `T` may be unsized so string rules can validate `&str` directly.
pub trait Validator<T: ?Sized> {
    /// Validate the input and return Ok(()) if valid, or the violated rule
    fn validate(&self, input: &T) -> Result<(), RuleViolation>;
}

/// Outcome of running a form schema
pub type Validation<T> = Result<T, FieldErrors>;

/// Field path -> first failing message, in field declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field. The first message recorded for a field wins.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.entries.push((field, message.into()));
        }
    }

    /// Message attached to a field, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Field paths that carry an error
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Turn the collected errors into a result for `value`
    pub(crate) fn into_result<T>(self, value: impl FnOnce() -> T) -> Validation<T> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Run a chain of rules against one value, stopping at the first failure.
///
/// `message` maps the violated rule to the field's user-facing text.
pub(crate) fn check(
    errors: &mut FieldErrors,
    field: &'static str,
    input: &str,
    rules: &[&dyn Validator<str>],
    message: impl Fn(&RuleViolation) -> &'static str,
) -> bool {
    for rule in rules {
        if let Err(violation) = rule.validate(input) {
            tracing::debug!(field, %violation, "field failed validation");
            errors.insert(field, message(&violation));
            return false;
        }
    }
    true
}
