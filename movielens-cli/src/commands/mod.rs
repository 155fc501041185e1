pub(crate) mod config;
pub(crate) mod details;
pub(crate) mod menu;
pub(crate) mod review;
pub(crate) mod search;
pub(crate) mod stats;
pub(crate) mod tagline;
pub(crate) mod top;

/// Inclusive bounds for a review rating.
pub(crate) const MIN_RATING: i64 = 0;
pub(crate) const MAX_RATING: i64 = 10;

pub(crate) const NO_SUCH_MOVIE: &str = "No such movie...";

#[cfg(test)]
#[path = "tests/output_tests.rs"]
mod tests;
