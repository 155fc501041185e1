use std::io::{self, Write};

use movielens_catalog::MovieRanking;
use movielens_db::Connection;

use crate::format::format_rating;

/// `n` and `min_reviews` must already be positive.
pub(crate) fn run_top(
    conn: &Connection,
    n: i64,
    min_reviews: i64,
    out: &mut dyn Write,
) -> io::Result<()> {
    let movies = movielens_db::top_movies(conn, n, min_reviews);
    if movies.is_empty() {
        log::debug!("No movies have at least {} reviews", min_reviews);
    }
    print_rankings(&movies, out)
}

/// One line per movie; nothing at all for an empty list.
pub(crate) fn print_rankings(movies: &[MovieRanking], out: &mut dyn Write) -> io::Result<()> {
    for movie in movies {
        writeln!(
            out,
            "{} : {} ({}), avg rating = {} ({} reviews)",
            movie.id,
            movie.title,
            movie.release_year,
            format_rating(movie.average_rating),
            movie.review_count,
        )?;
    }
    Ok(())
}
