//! Domain - Pure Data Structures
//!
//! These types don't depend on any screen or component and represent the
//! administration domain as the remote API returns it.

pub mod account;
pub mod config;
pub mod user;
