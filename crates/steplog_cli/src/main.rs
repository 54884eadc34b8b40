//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `steplog_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use steplog_core::db::open_db_in_memory;
use steplog_core::{ActivityStore, SqliteActivityStore};

fn main() {
    println!("steplog_core ping={}", steplog_core::ping());
    println!("steplog_core version={}", steplog_core::core_version());

    // Exercise the storage path end to end against a throwaway database.
    match smoke_storage() {
        Ok(rows) => println!("steplog_core storage=ok rows={rows}"),
        Err(err) => {
            eprintln!("steplog_core storage=error error={err}");
            std::process::exit(1);
        }
    }
}

fn smoke_storage() -> Result<usize, Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let store = SqliteActivityStore::new(&conn);
    store.insert(&steplog_core::ActivityDraft::new(1000, 1_700_000_000))?;
    Ok(store.list_all()?.len())
}
