//! Cafe Types - Pure type definitions for the cafe listing service
//!
//! This crate contains only data types and their static schema metadata,
//! with no async runtime or storage dependencies.

pub mod cafe;
pub mod column;
pub mod seating;

pub use cafe::*;
pub use column::*;
pub use seating::*;
