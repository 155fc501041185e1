//! movielens CLI
//!
//! Command-line interface over a MovieLens ratings database.

mod cli_types;
mod commands;
mod error;
mod format;
mod logging;
mod settings;

use std::io;
use std::path::PathBuf;

use clap::Parser;

use movielens_db::{Connection, SchemaError};

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let conn = open_db(cli.db)?;
            commands::menu::run_menu(&conn, io::stdin().lock(), &mut out)?;
        }
        Commands::Stats => {
            let conn = open_db(cli.db)?;
            commands::stats::run_stats(&conn, &mut out)?;
        }
        Commands::Search { pattern } => {
            let conn = open_db(cli.db)?;
            commands::search::run_search(&conn, &pattern, &mut out)?;
        }
        Commands::Details { id } => {
            let conn = open_db(cli.db)?;
            commands::details::run_details(&conn, id, &mut out)?;
        }
        Commands::Top { n, min_reviews } => {
            let conn = open_db(cli.db)?;
            commands::top::run_top(&conn, n, min_reviews, &mut out)?;
        }
        Commands::Review { id, rating } => {
            let conn = open_db(cli.db)?;
            commands::review::run_review(&conn, id, rating, &mut out)?;
        }
        Commands::Tagline { id, text } => {
            let conn = open_db(cli.db)?;
            commands::tagline::run_tagline(&conn, id, &text, &mut out)?;
        }
        Commands::Config { action } => {
            commands::config::run_config(action, cli.db, &mut out)?;
        }
    }

    Ok(())
}

/// Resolve the database path and open it. The connection is held for the
/// rest of the process.
fn open_db(cli_override: Option<PathBuf>) -> Result<Connection, CliError> {
    let (path, source) = settings::resolve_database_path(cli_override);
    log::debug!("Using database {} ({})", path.display(), source);

    movielens_db::open_database(&path).map_err(|e| match e {
        SchemaError::Missing(_) => CliError::database(format!(
            "{} (pass --db or set ${})",
            e,
            settings::DB_ENV_VAR,
        )),
        SchemaError::Sqlite(_) => {
            CliError::database(format!("Failed to open {}: {}", path.display(), e))
        }
    })
}
