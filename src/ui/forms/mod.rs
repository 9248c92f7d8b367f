//! Form rendering module
//!
//! Field and error-message drawing shared by the login and registration screens.

mod field_renderer;

pub use field_renderer::{draw_field, field_height};
