//! Activity list view-state controller.
//!
//! # Responsibility
//! - Keep an in-memory snapshot of the store, replaced wholesale after
//!   every mutation (no incremental patching or diffing).
//! - Track which single row is swiped open and instruct the previous one
//!   to close when another opens.
//!
//! # Invariants
//! - At most one row is open at any time.
//! - On store failure the snapshot keeps its last known-good value.
//! - Every operation takes `&mut self`, so two mutating calls on one list
//!   instance cannot overlap; each store call completes before the next is
//!   issued.

use crate::model::record::{ActivityDraft, ActivityRecord, RecordId};
use crate::repo::activity_repo::{ActivityStore, StoreResult};
use log::{info, warn};

/// Close-animation capability of the rendering layer.
///
/// The controller only decides *which* row must close; how the affordance
/// animates shut is the renderer's business.
pub trait RowAnimator {
    fn close_row(&mut self, id: RecordId);
}

/// Yes/no confirmation capability, typically a modal dialog.
///
/// Treated as a synchronous gate: `remove_all` blocks on the answer before
/// touching the store.
pub trait ConfirmGate {
    fn confirm_delete_all(&mut self) -> bool;
}

/// Result of a [`ActivityList::remove_all`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveAllOutcome {
    /// The list was empty; the store was not called and no gate was shown.
    NothingToDelete,
    /// The gate declined; the store was not called.
    Cancelled,
    /// Every record was deleted and the snapshot refreshed.
    Deleted,
}

/// View-state controller for one rendered activity list.
///
/// Generic over [`ActivityStore`] so tests can substitute counting or
/// failing stubs for the SQLite implementation.
pub struct ActivityList<S: ActivityStore> {
    store: S,
    displayed: Vec<ActivityRecord>,
    open_id: Option<RecordId>,
}

impl<S: ActivityStore> ActivityList<S> {
    /// Creates a controller with an empty snapshot; call [`Self::refresh`]
    /// on screen activation to populate it.
    pub fn new(store: S) -> Self {
        Self {
            store,
            displayed: Vec::new(),
            open_id: None,
        }
    }

    /// The current snapshot, most recent date first.
    pub fn displayed(&self) -> &[ActivityRecord] {
        &self.displayed
    }

    /// Id of the currently swiped-open row, if any.
    pub fn open_id(&self) -> Option<RecordId> {
        self.open_id
    }

    /// Re-fetches the full list and replaces the snapshot wholesale.
    ///
    /// Every mutation pays this O(n) re-fetch instead of patching the
    /// snapshot; fine for the record counts a single user produces.
    ///
    /// Never partial: on failure the snapshot is left untouched and the
    /// error propagates unchanged. Does not reconcile `open_id` against the
    /// fresh snapshot; callers that delete the open row must clear it (see
    /// [`Self::remove`]).
    pub fn refresh(&mut self) -> StoreResult<&[ActivityRecord]> {
        let records = self.store.list_all()?;
        self.displayed = records;
        info!(
            "event=list_refresh module=controller status=ok rows={}",
            self.displayed.len()
        );
        Ok(&self.displayed)
    }

    /// Inserts one record and refreshes the snapshot.
    pub fn add(&mut self, steps: i64, date: i64) -> StoreResult<RecordId> {
        let id = self.store.insert(&ActivityDraft::new(steps, date))?;
        info!("event=record_add module=controller status=ok id={id}");
        self.refresh()?;
        Ok(id)
    }

    /// Deletes one record, refreshes, and closes the row if it was the
    /// open one.
    pub fn remove(&mut self, id: RecordId) -> StoreResult<()> {
        self.store.delete_one(id)?;
        info!("event=record_remove module=controller status=ok id={id}");
        self.refresh()?;
        if self.open_id == Some(id) {
            self.open_id = None;
        }
        Ok(())
    }

    /// Deletes every record after passing the confirmation gate.
    ///
    /// An empty snapshot reports [`RemoveAllOutcome::NothingToDelete`]
    /// without showing the gate or touching the store.
    pub fn remove_all(&mut self, gate: &mut dyn ConfirmGate) -> StoreResult<RemoveAllOutcome> {
        if self.displayed.is_empty() {
            warn!("event=record_remove_all module=controller status=skipped reason=empty_list");
            return Ok(RemoveAllOutcome::NothingToDelete);
        }

        if !gate.confirm_delete_all() {
            info!("event=record_remove_all module=controller status=cancelled");
            return Ok(RemoveAllOutcome::Cancelled);
        }

        self.store.delete_all()?;
        info!("event=record_remove_all module=controller status=ok");
        self.refresh()?;
        self.open_id = None;
        Ok(RemoveAllOutcome::Deleted)
    }

    /// Records `id` as the open row.
    ///
    /// If a different row was open, exactly one `close_row` instruction is
    /// issued for it before the new id is recorded. Re-opening the already
    /// open row issues nothing.
    pub fn set_open(&mut self, id: RecordId, rows: &mut dyn RowAnimator) {
        match self.open_id {
            Some(previous) if previous == id => {}
            Some(previous) => {
                rows.close_row(previous);
                self.open_id = Some(id);
            }
            None => self.open_id = Some(id),
        }
    }

    /// Marks every row closed.
    pub fn clear_open(&mut self) {
        self.open_id = None;
    }
}
