//! Application state module

mod app_state;
mod forms;
mod lookup_state;
mod splash_state;

pub use app_state::*;
pub use forms::*;
pub use lookup_state::*;
pub use splash_state::*;
