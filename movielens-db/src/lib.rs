//! SQLite access for the MovieLens database.
//!
//! `datatier` runs raw SQL; `queries` and `operations` build the typed
//! results from `movielens-catalog` on top of it.

pub mod datatier;
pub mod operations;
pub mod queries;
pub mod schema;

pub use datatier::DataError;
pub use operations::{add_review, movie_exists, set_tagline};
pub use queries::{
    SEARCH_DISPLAY_LIMIT, database_counts, movie_details, num_movies, num_reviews, search_movies,
    top_movies,
};
pub use rusqlite::Connection;
pub use schema::{SchemaError, create_database, create_schema, open_database, open_memory};
