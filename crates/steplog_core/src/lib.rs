//! Core domain logic for steplog.
//! This crate is the single source of truth for business invariants.

pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use controller::list_controller::{
    ActivityList, ConfirmGate, RemoveAllOutcome, RowAnimator,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{ActivityDraft, ActivityRecord, DraftValidationError, RecordId};
pub use repo::activity_repo::{ActivityStore, SqliteActivityStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
