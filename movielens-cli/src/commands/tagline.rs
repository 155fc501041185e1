use std::io::{self, Write};

use movielens_db::Connection;

use super::NO_SUCH_MOVIE;

pub(crate) fn run_tagline(
    conn: &Connection,
    movie_id: i64,
    tagline: &str,
    out: &mut dyn Write,
) -> io::Result<()> {
    if movielens_db::set_tagline(conn, movie_id, tagline) {
        writeln!(out, "Tagline successfully set")
    } else {
        writeln!(out, "{}", NO_SUCH_MOVIE)
    }
}
