//! Storage layer
//!
//! Uses SQLite (embedded) for durable storage.
//! Uses DashMap (in-memory) for tests and throwaway instances.

pub mod db;
pub mod memory;

pub use db::Database;
pub use memory::MemoryStore;
