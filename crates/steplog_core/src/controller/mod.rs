//! Controller layer bridging the activity store to presentable list state.
//!
//! # Responsibility
//! - Mirror store contents into an ordered, wholesale-replaced snapshot.
//! - Own the one-swiped-open-row interaction invariant.
//!
//! # Invariants
//! - Controller APIs never bypass store validation/persistence contracts.
//! - The snapshot is never authoritative; every mutation re-fetches.

pub mod list_controller;
