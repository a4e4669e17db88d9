//! Admin Console Library
//!
//! Headless core of a user administration console: paged user lists with
//! responsive column layouts, confirmable row actions, and the account
//! profile form, all driven against an [`services::AdminApi`] backend.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod form;
pub mod i18n;
pub mod services;
pub mod state;
pub mod utils;
