//! Value types for the MovieLens database.
//!
//! These are the shapes the object tier hands back to callers: search
//! summaries, ranked summaries, and full movie details.

pub mod types;

pub use types::{DatabaseCounts, MovieDetail, MovieRanking, MovieSummary};
