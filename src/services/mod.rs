//! Service Layer
//!
//! Remote reads and writes behind the screens: the backend trait, the shared
//! query cache, mutations and mount tokens.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Screen controllers                     │
//! │   fetch ──▶ QueryCache ◀── invalidate ── Mutation         │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ AdminApi
//! ┌──────────────────────────────────────────────────────────┐
//! │               MemoryApi (or a remote client)              │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod api;
mod memory_api;
pub mod mount;
pub mod mutation;
pub mod query_cache;

pub use api::*;
pub use memory_api::*;
pub use mount::MountToken;
pub use mutation::{LoadingFlag, Mutation};
pub use query_cache::{QueryCache, QueryKey, QueryKind, QueryState};
