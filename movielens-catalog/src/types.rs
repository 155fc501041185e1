//! Data model types for movie queries.

// ── Summaries ───────────────────────────────────────────────────────────────

/// A movie as returned by a title search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    /// Four-digit year, or empty when the release date is unknown.
    pub release_year: String,
}

/// A movie with its review aggregate, as returned by the top-N query.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRanking {
    pub id: i64,
    pub title: String,
    pub release_year: String,
    pub review_count: i64,
    /// Unrounded mean of all ratings (0..10).
    pub average_rating: f64,
}

// ── Details ─────────────────────────────────────────────────────────────────

/// Everything known about a single movie.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    /// `YYYY-MM-DD`, or empty when the release date is unknown.
    pub release_date: String,
    pub runtime_minutes: Option<i64>,
    pub original_language: String,
    /// USD
    pub budget: i64,
    /// USD
    pub revenue: i64,
    pub review_count: i64,
    /// Rounded to 2 decimals; exactly 0.0 when there are no reviews.
    pub average_rating: f64,
    /// Empty when the movie has no tagline row.
    pub tagline: String,
    /// Alphabetical.
    pub genres: Vec<String>,
    /// Alphabetical.
    pub production_companies: Vec<String>,
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Row counts shown in the startup banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatabaseCounts {
    pub movies: i64,
    pub reviews: i64,
}
