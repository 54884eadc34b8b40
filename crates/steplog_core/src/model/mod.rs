//! Domain model for logged activities.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store and controller.
//! - Own draft validation for caller-supplied input.
//!
//! # Invariants
//! - Every persisted record is identified by a store-assigned `RecordId`.
//! - Records are immutable after creation; deletion is the only mutation.

pub mod record;
