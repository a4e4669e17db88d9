//! Application Layer
//!
//! Shared handles, routes and the headless walkthrough run by the binary.

pub mod application;
pub mod entities;
pub mod navigation;
