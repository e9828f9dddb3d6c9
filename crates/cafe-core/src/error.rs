//! Error types for the cafe listing service

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CafeError>;

#[derive(Error, Debug)]
pub enum CafeError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Constraint violated on {field}: {message}")]
    ConstraintViolation {
        field: &'static str,
        message: String,
    },

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Corrupt row: {0}")]
    CorruptRow(String),
}

impl CafeError {
    /// Duplicate-name rejection raised by stores
    pub fn duplicate_name(name: &str) -> Self {
        CafeError::ConstraintViolation {
            field: "name",
            message: format!("A cafe named {:?} already exists", name),
        }
    }
}

/// A constraint failure attached to one submitted field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Field-level errors, kept in the order they were found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Messages recorded for one field
    pub fn for_field(&self, field: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}
