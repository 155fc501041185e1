use std::io::{self, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movielens_catalog::DatabaseCounts;
use movielens_db::Connection;

use crate::format::format_thousands;

pub(crate) fn run_stats(conn: &Connection, out: &mut dyn Write) -> io::Result<()> {
    print_stats(movielens_db::database_counts(conn), out)
}

pub(crate) fn print_stats(counts: Option<DatabaseCounts>, out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "General stats:".if_supports_color(Stdout, |t| t.bold())
    )?;
    match counts {
        Some(counts) => {
            writeln!(out, "  # of movies: {}", format_thousands(counts.movies))?;
            writeln!(out, "  # of reviews: {}", format_thousands(counts.reviews))?;
        }
        None => {
            log::warn!("Could not read movie and review counts");
            writeln!(out, "  # of movies: unavailable")?;
            writeln!(out, "  # of reviews: unavailable")?;
        }
    }
    Ok(())
}
