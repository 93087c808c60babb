//! Browser head backend for headsync.
//!
//! Implements `HeadDocument` against the live document head via `web-sys`.
//! It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Re-exports
//!
//! This crate re-exports `headsync-core` for convenience, so consumers
//! only need to depend on `headsync-browser`.

// Re-export core crate
pub use headsync_core;
pub use headsync_core::*;

mod head;

pub use head::BrowserHead;
