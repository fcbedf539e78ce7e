//! Observable store for board items.
//!
//! # Responsibility
//! - Own the canonical item collection and its listener registry.
//! - Hand listeners immutable snapshots after each successful mutation.

pub mod board_store;
pub mod snapshot;
pub mod subscription;
