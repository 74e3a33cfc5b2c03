//! Data models
//!
//! In-memory state for the calculator screen.

mod form;

pub use form::{FormError, FormState};
