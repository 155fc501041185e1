use std::io::{self, Write};

use movielens_catalog::MovieDetail;
use movielens_db::Connection;

use crate::format::{format_rating, format_runtime, format_usd};

use super::NO_SUCH_MOVIE;

pub(crate) fn run_details(conn: &Connection, movie_id: i64, out: &mut dyn Write) -> io::Result<()> {
    match movielens_db::movie_details(conn, movie_id) {
        Some(detail) => print_movie_detail(&detail, out),
        None => writeln!(out, "{}", NO_SUCH_MOVIE),
    }
}

pub(crate) fn print_movie_detail(detail: &MovieDetail, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{} : {}", detail.id, detail.title)?;
    writeln!(out, "  Release date: {}", detail.release_date)?;
    writeln!(out, "  Runtime: {} (mins)", format_runtime(detail.runtime_minutes))?;
    writeln!(out, "  Orig language: {}", detail.original_language)?;
    writeln!(out, "  Budget: {} (USD)", format_usd(detail.budget))?;
    writeln!(out, "  Revenue: {} (USD)", format_usd(detail.revenue))?;
    writeln!(out, "  Num reviews: {}", detail.review_count)?;
    writeln!(out, "  Avg rating: {} (0..10)", format_rating(detail.average_rating))?;
    writeln!(out, "  Genres: {}", detail.genres.join(", "))?;
    writeln!(
        out,
        "  Production companies: {}",
        detail.production_companies.join(", ")
    )?;
    writeln!(out, "  Tagline: {}", detail.tagline)?;
    Ok(())
}
