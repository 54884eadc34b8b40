//! Repository layer: the durable activity store contract and its SQLite
//! implementation.
//!
//! # Responsibility
//! - Define the store contract the list controller depends on.
//! - Isolate SQL details from controller orchestration.
//!
//! # Invariants
//! - Write paths validate drafts before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod activity_repo;
