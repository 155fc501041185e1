use std::io::{self, Write};

use movielens_catalog::MovieSummary;
use movielens_db::{Connection, SEARCH_DISPLAY_LIMIT};

pub(crate) fn run_search(conn: &Connection, pattern: &str, out: &mut dyn Write) -> io::Result<()> {
    let movies = movielens_db::search_movies(conn, pattern);
    print_search_results(&movies, out)
}

/// Print the match count, then either the matches or, past the display
/// limit, a request to narrow the search.
pub(crate) fn print_search_results(movies: &[MovieSummary], out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "# of movies found: {}", movies.len())?;
    if movies.is_empty() {
        return Ok(());
    }
    writeln!(out)?;

    if movies.len() > SEARCH_DISPLAY_LIMIT {
        writeln!(
            out,
            "There are too many movies to display, please narrow your search and try again..."
        )?;
        return Ok(());
    }

    for movie in movies {
        writeln!(out, "{} : {} ({})", movie.id, movie.title, movie.release_year)?;
    }
    Ok(())
}
