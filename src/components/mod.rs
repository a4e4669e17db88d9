//! Components - Reusable UI Components
//!
//! Headless view models that don't depend on services or do I/O.

pub mod composite;
pub mod primitives;
