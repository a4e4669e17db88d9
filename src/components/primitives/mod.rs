//! Primitive Components
//!
//! Basic building blocks shared by the composite components.

pub mod disclosure;
pub mod form_group;
