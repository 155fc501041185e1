use std::io::{self, Write};

use movielens_db::Connection;

use super::NO_SUCH_MOVIE;

/// `rating` must already be within `MIN_RATING..=MAX_RATING`.
pub(crate) fn run_review(
    conn: &Connection,
    movie_id: i64,
    rating: i64,
    out: &mut dyn Write,
) -> io::Result<()> {
    if movielens_db::add_review(conn, movie_id, rating) {
        log::debug!("Added rating {} to movie {}", rating, movie_id);
        writeln!(out, "Review successfully inserted")
    } else {
        writeln!(out, "{}", NO_SUCH_MOVIE)
    }
}
