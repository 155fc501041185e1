//! Write operations: adding reviews and setting taglines.
//!
//! Both return `true` only when the change was applied. A missing movie
//! and a store failure both yield `false`.

use rusqlite::{Connection, params};

use crate::datatier::{perform_action, select_one_row, try_select_one_row};

/// Whether a movie with this id exists.
pub fn movie_exists(conn: &Connection, movie_id: i64) -> bool {
    select_one_row(
        conn,
        "SELECT 1 FROM Movies WHERE Movie_ID = ?1",
        params![movie_id],
        |row| row.get::<_, i64>(0),
    )
    .is_some()
}

// ── Review Operations ───────────────────────────────────────────────────────

/// Append a review for the given movie.
///
/// The rating is expected to be in 0..=10; range checking is left to the
/// caller. Reviews are never deduplicated, so every call adds a row.
pub fn add_review(conn: &Connection, movie_id: i64, rating: i64) -> bool {
    if !movie_exists(conn, movie_id) {
        log::debug!("add_review: no movie {}", movie_id);
        return false;
    }

    perform_action(
        conn,
        "INSERT INTO Ratings (Movie_ID, Rating) VALUES (?1, ?2)",
        params![movie_id, rating],
    )
    .is_some()
}

// ── Tagline Operations ──────────────────────────────────────────────────────

/// Set or replace a movie's tagline.
///
/// An empty tagline is stored as an empty row, not removed. The existence
/// check and the insert/update are separate statements, so this keeps one
/// row per movie only while a single session writes to the database.
pub fn set_tagline(conn: &Connection, movie_id: i64, tagline: &str) -> bool {
    if !movie_exists(conn, movie_id) {
        log::debug!("set_tagline: no movie {}", movie_id);
        return false;
    }

    // On lookup failure, update rather than risk a second row.
    let has_tagline = match try_select_one_row(
        conn,
        "SELECT 1 FROM Movie_Taglines WHERE Movie_ID = ?1",
        params![movie_id],
        |row| row.get::<_, i64>(0),
    ) {
        Ok(found) => found.is_some(),
        Err(e) => {
            log::error!("set_tagline lookup failed: {}", e);
            true
        }
    };

    let changed = if has_tagline {
        perform_action(
            conn,
            "UPDATE Movie_Taglines SET Tagline = ?1 WHERE Movie_ID = ?2",
            params![tagline, movie_id],
        )
    } else {
        perform_action(
            conn,
            "INSERT INTO Movie_Taglines (Movie_ID, Tagline) VALUES (?1, ?2)",
            params![movie_id, tagline],
        )
    };
    changed.is_some()
}
