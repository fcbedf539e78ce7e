//! Work item domain model.
//!
//! # Responsibility
//! - Define the canonical data structures shared by the store, the drag-drop
//!   protocol and board projections.
//!
//! # Invariants
//! - Every work item is identified by a stable `ItemId`.
//! - Items are never removed; moving between lists only changes `status`.

pub mod item;
