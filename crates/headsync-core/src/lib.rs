//! headsync-core: declarative head-tag management without browser dependencies.
//!
//! This crate provides:
//! - `TagSpec` / `TagAttribute` - description of the managed tag
//! - `HeadDocument` trait for head-section backend abstraction
//! - `PlainHead` - in-memory backend for native use and tests
//! - `reconcile` - the create-or-update pass over any backend
//! - `HeadTagManager` - observable fields that re-run the pass on change

pub mod document;
pub mod error;
pub mod manager;
pub mod reconcile;
pub mod selector;
pub mod tag;

pub use document::{HeadDocument, PlainElement, PlainHead};
pub use error::HeadError;
pub use manager::HeadTagManager;
pub use reconcile::{Outcome, reconcile};
pub use selector::Selector;
pub use smol_str::SmolStr;
pub use tag::{TagAttribute, TagSpec};
