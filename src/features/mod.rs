//! Features - Vertical Feature Slices
//!
//! Each feature contains its page view model and controller.

pub mod account;
pub mod users;
