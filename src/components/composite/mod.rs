//! Composite Components
//!
//! Components assembled from primitives: the responsive data list, the
//! actions menu and pagination.

pub mod data_list;
pub mod menu_action;
pub mod pagination;
