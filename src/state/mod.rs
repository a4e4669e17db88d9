//! State - Plain Screen State
//!
//! Each module holds one piece of state shared by screens or components.

pub mod list_state;
pub mod location_state;
pub mod toast_state;
