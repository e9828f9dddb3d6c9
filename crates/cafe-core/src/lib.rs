//! Cafe Core Library
//!
//! Error taxonomy, the persistence port, and submission validation for the
//! cafe listing service.

// Re-export pure types from cafe-types
pub use cafe_types::*;

pub mod error;
pub mod form;
pub mod ports;

pub use error::{CafeError, FieldError, FieldErrors, Result};
pub use form::CafeForm;
pub use ports::CafeStore;
