//! Storage trait for persistence

use crate::Result;
use async_trait::async_trait;
use cafe_types::{Cafe, NewCafe};

/// Cafe store
///
/// Implementations must enforce name uniqueness atomically: of two
/// concurrent inserts with the same name, exactly one succeeds and the other
/// fails with [`crate::CafeError::ConstraintViolation`] without writing.
#[async_trait]
pub trait CafeStore: Send + Sync {
    /// Persist a new cafe and return it with its assigned identifier
    async fn insert(&self, cafe: &NewCafe) -> Result<Cafe>;

    /// All stored cafes in insertion order
    async fn list_all(&self) -> Result<Vec<Cafe>>;
}
