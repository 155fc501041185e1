//! Interactive numbered-command menu.
//!
//! Reads commands and their arguments line by line from `input` and writes
//! prompts and results to `out`. Range checks on ratings and counts happen
//! here, before the database is touched.

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use movielens_db::Connection;

use super::{MAX_RATING, MIN_RATING, details, review, search, stats, tagline, top};

const COMMAND_PROMPT: &str = "Please enter a command (1-5, x to exit): ";

/// Run the menu until the user enters `x` or input ends.
pub(crate) fn run_menu<R: BufRead, W: Write>(
    conn: &Connection,
    input: R,
    out: W,
) -> io::Result<()> {
    Menu { conn, input, out }.run()
}

struct Menu<'a, R, W> {
    conn: &'a Connection,
    input: R,
    out: W,
}

/// Whether the menu keeps going after a command.
enum Flow {
    Continue,
    Exit,
}

/// A numeric answer to a prompt.
enum Answer {
    Value(i64),
    Invalid,
    Closed,
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            "** Welcome to the MovieLens app **".if_supports_color(Stdout, |t| t.bold())
        )?;
        writeln!(self.out)?;
        stats::print_stats(movielens_db::database_counts(self.conn), &mut self.out)?;
        writeln!(self.out)?;

        loop {
            let Some(command) = self.prompt(COMMAND_PROMPT)? else {
                break;
            };
            let flow = match command.trim() {
                "1" => self.search()?,
                "2" => self.details()?,
                "3" => self.top()?,
                "4" => self.add_review()?,
                "5" => self.set_tagline()?,
                "x" => Flow::Exit,
                other => {
                    log::debug!("Unknown menu command {:?}", other);
                    writeln!(self.out, "**Error, unknown command, try again...")?;
                    writeln!(self.out)?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                break;
            }
        }
        Ok(())
    }

    // ── Commands ────────────────────────────────────────────────────────────

    fn search(&mut self) -> io::Result<Flow> {
        writeln!(self.out)?;
        let Some(pattern) = self.prompt("Enter movie name (wildcards _ and % supported): ")? else {
            return Ok(Flow::Exit);
        };
        writeln!(self.out)?;
        search::run_search(self.conn, &pattern, &mut self.out)?;
        writeln!(self.out)?;
        Ok(Flow::Continue)
    }

    fn details(&mut self) -> io::Result<Flow> {
        writeln!(self.out)?;
        let movie_id = match self.prompt_number("Enter movie id: ")? {
            Answer::Value(id) => id,
            Answer::Invalid => return self.not_a_number(),
            Answer::Closed => return Ok(Flow::Exit),
        };
        writeln!(self.out)?;
        details::run_details(self.conn, movie_id, &mut self.out)?;
        writeln!(self.out)?;
        Ok(Flow::Continue)
    }

    fn top(&mut self) -> io::Result<Flow> {
        writeln!(self.out)?;
        let n = match self.prompt_number("N? ")? {
            Answer::Value(n) => n,
            Answer::Invalid => return self.not_a_number(),
            Answer::Closed => return Ok(Flow::Exit),
        };
        if n <= 0 {
            return self.reject("Please enter a positive value for N...");
        }

        let min_reviews = match self.prompt_number("min number of reviews? ")? {
            Answer::Value(k) => k,
            Answer::Invalid => return self.not_a_number(),
            Answer::Closed => return Ok(Flow::Exit),
        };
        if min_reviews <= 0 {
            return self.reject("Please enter a positive value for min number of reviews...");
        }

        let movies = movielens_db::top_movies(self.conn, n, min_reviews);
        if !movies.is_empty() {
            writeln!(self.out)?;
            top::print_rankings(&movies, &mut self.out)?;
        }
        writeln!(self.out)?;
        Ok(Flow::Continue)
    }

    fn add_review(&mut self) -> io::Result<Flow> {
        writeln!(self.out)?;
        let rating = match self.prompt_number("Enter rating (0..10): ")? {
            Answer::Value(r) => r,
            Answer::Invalid => return self.not_a_number(),
            Answer::Closed => return Ok(Flow::Exit),
        };
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return self.reject("Invalid rating...");
        }

        let movie_id = match self.prompt_number("Enter movie id: ")? {
            Answer::Value(id) => id,
            Answer::Invalid => return self.not_a_number(),
            Answer::Closed => return Ok(Flow::Exit),
        };
        writeln!(self.out)?;
        review::run_review(self.conn, movie_id, rating, &mut self.out)?;
        writeln!(self.out)?;
        Ok(Flow::Continue)
    }

    fn set_tagline(&mut self) -> io::Result<Flow> {
        writeln!(self.out)?;
        let Some(text) = self.prompt("tagline? ")? else {
            return Ok(Flow::Exit);
        };
        let movie_id = match self.prompt_number("movie id? ")? {
            Answer::Value(id) => id,
            Answer::Invalid => return self.not_a_number(),
            Answer::Closed => return Ok(Flow::Exit),
        };
        writeln!(self.out)?;
        tagline::run_tagline(self.conn, movie_id, &text, &mut self.out)?;
        writeln!(self.out)?;
        Ok(Flow::Continue)
    }

    // ── Input helpers ───────────────────────────────────────────────────────

    /// Print `text` and read one line without its line ending. `None` once
    /// input is exhausted.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt_number(&mut self, text: &str) -> io::Result<Answer> {
        let answer = match self.prompt(text)? {
            None => Answer::Closed,
            Some(line) => match line.trim().parse() {
                Ok(n) => Answer::Value(n),
                Err(_) => Answer::Invalid,
            },
        };
        Ok(answer)
    }

    fn not_a_number(&mut self) -> io::Result<Flow> {
        self.reject("Please enter a number...")
    }

    fn reject(&mut self, message: &str) -> io::Result<Flow> {
        writeln!(self.out, "{}", message)?;
        writeln!(self.out)?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
#[path = "tests/menu_tests.rs"]
mod tests;
