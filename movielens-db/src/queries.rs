//! Read queries: counters, title search, movie details, and top-N ranking.
//!
//! Store failures are logged by `datatier` and surface here exactly like
//! an empty result.

use movielens_catalog::types::*;
use rusqlite::{Connection, params};

use crate::datatier::{select_n_rows, select_one_row};

/// Search results beyond this many are reported but not listed.
pub const SEARCH_DISPLAY_LIMIT: usize = 100;

// ── Counters ────────────────────────────────────────────────────────────────

/// Number of movies in the database, or `None` on a store failure.
pub fn num_movies(conn: &Connection) -> Option<i64> {
    select_one_row(conn, "SELECT count(*) FROM Movies", [], |r| r.get(0))
}

/// Number of reviews in the database, or `None` on a store failure.
pub fn num_reviews(conn: &Connection) -> Option<i64> {
    select_one_row(conn, "SELECT count(*) FROM Ratings", [], |r| r.get(0))
}

/// Both counters, or `None` if either could not be read.
pub fn database_counts(conn: &Connection) -> Option<DatabaseCounts> {
    Some(DatabaseCounts {
        movies: num_movies(conn)?,
        reviews: num_reviews(conn)?,
    })
}

// ── Search ──────────────────────────────────────────────────────────────────

/// All movies whose title is `LIKE` the pattern, ordered by title.
///
/// The pattern is passed through verbatim: `_` matches one character and
/// `%` any run of characters, and there is no way to escape either. Pass
/// `"%"` to list every movie.
pub fn search_movies(conn: &Connection, pattern: &str) -> Vec<MovieSummary> {
    log::debug!("Searching titles like {:?}", pattern);
    select_n_rows(
        conn,
        "SELECT Movie_ID, Title, strftime('%Y', Release_Date)
         FROM Movies
         WHERE Title LIKE ?1
         ORDER BY Title ASC",
        params![pattern],
        |row| {
            Ok(MovieSummary {
                id: row.get(0)?,
                title: row.get(1)?,
                release_year: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            })
        },
    )
}

// ── Details ─────────────────────────────────────────────────────────────────

/// The `Movies` row joined with its tagline, before aggregates are attached.
struct MovieRow {
    id: i64,
    title: String,
    release_date: Option<String>,
    runtime_minutes: Option<i64>,
    original_language: Option<String>,
    budget: Option<i64>,
    revenue: Option<i64>,
    tagline: Option<String>,
}

/// Full details for one movie, or `None` if no such movie exists.
///
/// When the movie row is missing no further queries are issued.
pub fn movie_details(conn: &Connection, movie_id: i64) -> Option<MovieDetail> {
    let movie = select_one_row(
        conn,
        "SELECT Movies.Movie_ID, Title, date(Release_Date), Runtime,
                Original_Language, Budget, Revenue, Tagline
         FROM Movies
         LEFT JOIN Movie_Taglines ON Movies.Movie_ID = Movie_Taglines.Movie_ID
         WHERE Movies.Movie_ID = ?1",
        params![movie_id],
        row_to_movie,
    )?;

    let (review_count, average_rating) = review_aggregate(conn, movie_id);
    let genres: Vec<String> = select_n_rows(
        conn,
        "SELECT Genre_Name
         FROM Genres
         JOIN Movie_Genres ON Genres.Genre_ID = Movie_Genres.Genre_ID
         WHERE Movie_Genres.Movie_ID = ?1
         ORDER BY Genre_Name ASC",
        params![movie_id],
        |row| row.get(0),
    );
    let production_companies: Vec<String> = select_n_rows(
        conn,
        "SELECT Company_Name
         FROM Companies
         JOIN Movie_Production_Companies
           ON Companies.Company_ID = Movie_Production_Companies.Company_ID
         WHERE Movie_Production_Companies.Movie_ID = ?1
         ORDER BY Company_Name ASC",
        params![movie_id],
        |row| row.get(0),
    );

    Some(MovieDetail {
        id: movie.id,
        title: movie.title,
        release_date: movie.release_date.unwrap_or_default(),
        runtime_minutes: movie.runtime_minutes,
        original_language: movie.original_language.unwrap_or_default(),
        budget: movie.budget.unwrap_or(0),
        revenue: movie.revenue.unwrap_or(0),
        review_count,
        average_rating,
        tagline: movie.tagline.unwrap_or_default(),
        genres,
        production_companies,
    })
}

/// Review count and average rounded to 2 decimals.
///
/// A movie with no reviews averages exactly 0.0 rather than NULL.
fn review_aggregate(conn: &Connection, movie_id: i64) -> (i64, f64) {
    let row: Option<(i64, Option<f64>)> = select_one_row(
        conn,
        "SELECT count(Rating), round(avg(Rating), 2)
         FROM Ratings
         WHERE Movie_ID = ?1",
        params![movie_id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    );
    match row {
        Some((count, Some(avg))) if count > 0 => (count, avg),
        Some((count, _)) => (count, 0.0),
        None => (0, 0.0),
    }
}

// ── Ranking ─────────────────────────────────────────────────────────────────

/// The `n` highest-rated movies with at least `min_reviews` reviews.
///
/// Ordered by average rating, then review count, both descending. Inputs
/// are not validated here; a threshold nothing meets yields an empty list.
pub fn top_movies(conn: &Connection, n: i64, min_reviews: i64) -> Vec<MovieRanking> {
    log::debug!("Ranking top {} movies with >= {} reviews", n, min_reviews);
    select_n_rows(
        conn,
        "SELECT Movies.Movie_ID, Title, strftime('%Y', Release_Date),
                count(Rating), avg(Rating)
         FROM Movies
         JOIN Ratings ON Movies.Movie_ID = Ratings.Movie_ID
         GROUP BY Movies.Movie_ID
         HAVING count(Rating) >= ?1
         ORDER BY avg(Rating) DESC, count(Rating) DESC
         LIMIT ?2",
        params![min_reviews, n],
        |row| {
            Ok(MovieRanking {
                id: row.get(0)?,
                title: row.get(1)?,
                release_year: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                review_count: row.get(3)?,
                average_rating: row.get(4)?,
            })
        },
    )
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_movie(row: &rusqlite::Row<'_>) -> rusqlite::Result<MovieRow> {
    Ok(MovieRow {
        id: row.get(0)?,
        title: row.get(1)?,
        release_date: row.get(2)?,
        runtime_minutes: row.get(3)?,
        original_language: row.get(4)?,
        budget: row.get(5)?,
        revenue: row.get(6)?,
        tagline: row.get(7)?,
    })
}
