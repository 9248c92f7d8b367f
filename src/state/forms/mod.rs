//! Form domain layer
//!
//! Type-safe form handling for the login and registration screens.

mod field;
mod form_state;

pub use field::{FieldKind, FormField};
pub use form_state::{Form, LoginForm, RegisterForm};
