//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{MAX_RATING, MIN_RATING};

#[derive(Parser)]
#[command(name = "movielens")]
#[command(about = "Search, rank, and review movies in a MovieLens database", long_about = None)]
pub(crate) struct Cli {
    /// Database file (overrides $MOVIELENS_DB and the settings file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show errors in diagnostic output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Interactive menu (the default)
    Menu,

    /// Show the number of movies and reviews
    Stats,

    /// Find movies by title (wildcards _ and % supported)
    Search {
        /// Title pattern, e.g. "%star wars%"
        pattern: String,
    },

    /// Show everything known about one movie
    Details {
        /// Movie id
        id: i64,
    },

    /// List the highest-rated movies
    Top {
        /// Number of movies to list
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        n: i64,

        /// Only consider movies with at least this many reviews
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(i64).range(1..))]
        min_reviews: i64,
    },

    /// Add a review (rating 0..10) to a movie
    Review {
        /// Movie id
        id: i64,

        /// Rating between 0 and 10 inclusive
        #[arg(value_parser = clap::value_parser!(i64).range(MIN_RATING..=MAX_RATING))]
        rating: i64,
    },

    /// Set or replace a movie's tagline ("" leaves an empty tagline)
    Tagline {
        /// Movie id
        id: i64,

        /// New tagline
        text: String,
    },

    /// Manage the saved database path
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the resolved database path and where it came from
    Show,

    /// Print the settings file path
    Path,

    /// Save a database path to the settings file
    SetDb {
        /// Path to the MovieLens database
        path: PathBuf,
    },

    /// Remove the saved database path
    UnsetDb,
}
