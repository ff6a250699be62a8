//! Detection of changes committed by other connections.
//!
//! `PRAGMA data_version` changes whenever another connection commits to the
//! database file. Callers poll it and, on change, re-fetch their snapshot and
//! recompute: this is the "data changed" signal.

use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub struct ChangeDetector {
    last_version: i64,
}

fn data_version(pool: &mut DbPool) -> AppResult<i64> {
    let v: i64 = pool.with_conn(|c| c.query_row("PRAGMA data_version;", [], |row| row.get(0)))?;
    Ok(v)
}

impl ChangeDetector {
    /// Start watching from the current state of the database.
    pub fn new(pool: &mut DbPool) -> AppResult<Self> {
        Ok(Self {
            last_version: data_version(pool)?,
        })
    }

    /// True once per external commit since the previous call.
    pub fn has_changed(&mut self, pool: &mut DbPool) -> AppResult<bool> {
        let current = data_version(pool)?;
        if current != self.last_version {
            self.last_version = current;
            return Ok(true);
        }
        Ok(false)
    }
}
