//! Account Feature
//!
//! Profile screen of the signed-in account.

pub mod controller;
pub mod page;

pub use controller::{ProfileController, SubmitOutcome};
pub use page::ProfilePage;
