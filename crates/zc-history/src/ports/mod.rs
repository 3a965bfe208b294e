//! # Ports
//!
//! Interfaces the surrounding layers (gateway, runtime) depend on.

mod store;

pub use store::HistoryStore;
