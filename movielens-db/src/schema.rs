//! Opening the MovieLens database and creating its tables.
//!
//! The database is owned externally; nothing here migrates an existing
//! file. `create_schema` exists so fresh files and test fixtures can be
//! populated with the same layout.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("No database found at {}", .0.display())]
    Missing(PathBuf),
}

/// Create all tables if they don't exist.
///
/// This is idempotent and safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open an existing database file for reading and writing.
///
/// Unlike `Connection::open`, a missing file is an error rather than a
/// silently created empty database.
pub fn open_database(path: &Path) -> Result<Connection, SchemaError> {
    if !path.exists() {
        return Err(SchemaError::Missing(path.to_path_buf()));
    }
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    log::debug!("Opened database {}", path.display());
    Ok(conn)
}

/// Create (or open) a database file and ensure every table exists.
pub fn create_database(path: &Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Every table the object tier reads or writes.
pub const TABLES: [&str; 7] = [
    "Movies",
    "Ratings",
    "Movie_Taglines",
    "Genres",
    "Movie_Genres",
    "Companies",
    "Movie_Production_Companies",
];

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS Movies (
    Movie_ID INTEGER PRIMARY KEY,
    Title TEXT NOT NULL,
    Release_Date TEXT,
    Runtime INTEGER,
    Original_Language TEXT,
    Budget INTEGER NOT NULL DEFAULT 0,
    Revenue INTEGER NOT NULL DEFAULT 0
);
CREATE INDEX IF NOT EXISTS idx_movies_title ON Movies(Title);

-- One row per review; no identity beyond the movie it belongs to
CREATE TABLE IF NOT EXISTS Ratings (
    Movie_ID INTEGER NOT NULL REFERENCES Movies(Movie_ID),
    Rating INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_ratings_movie ON Ratings(Movie_ID);

-- At most one row per movie. set_tagline maintains this, not a constraint.
CREATE TABLE IF NOT EXISTS Movie_Taglines (
    Movie_ID INTEGER NOT NULL REFERENCES Movies(Movie_ID),
    Tagline TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_taglines_movie ON Movie_Taglines(Movie_ID);

CREATE TABLE IF NOT EXISTS Genres (
    Genre_ID INTEGER PRIMARY KEY,
    Genre_Name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Movie_Genres (
    Movie_ID INTEGER NOT NULL REFERENCES Movies(Movie_ID),
    Genre_ID INTEGER NOT NULL REFERENCES Genres(Genre_ID),
    PRIMARY KEY (Movie_ID, Genre_ID)
);

CREATE TABLE IF NOT EXISTS Companies (
    Company_ID INTEGER PRIMARY KEY,
    Company_Name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Movie_Production_Companies (
    Movie_ID INTEGER NOT NULL REFERENCES Movies(Movie_ID),
    Company_ID INTEGER NOT NULL REFERENCES Companies(Company_ID),
    PRIMARY KEY (Movie_ID, Company_ID)
);
"#;
