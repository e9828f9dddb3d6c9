//! In-memory cafe store using DashMap

use async_trait::async_trait;
use cafe_core::{Cafe, CafeError, CafeStore, NewCafe};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// Process-local store keyed by cafe name
///
/// The name key doubles as the uniqueness constraint: the entry lock makes
/// check-and-insert atomic per name.
pub struct MemoryStore {
    cafes: DashMap<String, Cafe>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            cafes: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CafeStore for MemoryStore {
    async fn insert(&self, cafe: &NewCafe) -> cafe_core::Result<Cafe> {
        match self.cafes.entry(cafe.name.clone()) {
            Entry::Occupied(_) => Err(CafeError::duplicate_name(&cafe.name)),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let stored = Cafe::from_new(id, cafe.clone());
                slot.insert(stored.clone());
                Ok(stored)
            }
        }
    }

    async fn list_all(&self) -> cafe_core::Result<Vec<Cafe>> {
        let mut cafes: Vec<Cafe> = self.cafes.iter().map(|entry| entry.value().clone()).collect();
        cafes.sort_by_key(|cafe| cafe.id);
        Ok(cafes)
    }
}
