//! Row access helpers shared by every query and operation.
//!
//! The `try_*` functions report SQLite failures through `DataError`. The
//! plain variants log the failure and return the same value as "nothing
//! matched", which is what the object tier consumes.

use rusqlite::{Connection, Params, Row};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

// ── Strict variants ─────────────────────────────────────────────────────────

/// Run a query expected to yield at most one row.
///
/// Returns `Ok(None)` when the query matched nothing. Any rows past the
/// first are ignored.
pub fn try_select_one_row<T, P, F>(
    conn: &Connection,
    sql: &str,
    params: P,
    map: F,
) -> Result<Option<T>, DataError>
where
    P: Params,
    F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let result = stmt.query_row(params, map);
    match result {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Run a query and map every returned row.
pub fn try_select_n_rows<T, P, F>(
    conn: &Connection,
    sql: &str,
    params: P,
    map: F,
) -> Result<Vec<T>, DataError>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, map)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Execute an INSERT/UPDATE/DELETE and return the number of affected rows.
pub fn try_perform_action<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<usize, DataError> {
    Ok(conn.execute(sql, params)?)
}

// ── Collapsing variants ─────────────────────────────────────────────────────

/// Like [`try_select_one_row`], but a failure is logged and reported as `None`.
pub fn select_one_row<T, P, F>(conn: &Connection, sql: &str, params: P, map: F) -> Option<T>
where
    P: Params,
    F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
{
    match try_select_one_row(conn, sql, params, map) {
        Ok(row) => row,
        Err(e) => {
            log::error!("select_one_row failed: {}", e);
            None
        }
    }
}

/// Like [`try_select_n_rows`], but a failure is logged and reported as no rows.
pub fn select_n_rows<T, P, F>(conn: &Connection, sql: &str, params: P, map: F) -> Vec<T>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    match try_select_n_rows(conn, sql, params, map) {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("select_n_rows failed: {}", e);
            Vec::new()
        }
    }
}

/// Like [`try_perform_action`], but a failure is logged and reported as `None`.
pub fn perform_action<P: Params>(conn: &Connection, sql: &str, params: P) -> Option<usize> {
    match try_perform_action(conn, sql, params) {
        Ok(changed) => Some(changed),
        Err(e) => {
            log::error!("perform_action failed: {}", e);
            None
        }
    }
}
