use serde::{Deserialize, Serialize};

use crate::modules::watchlist::domain::{MovieRecord, SortKey};

/// Save form payload. The fields mirror what the add-movie form posts back
/// after a search; `imdb_id` is optional here because the body is untyped at
/// the transport edge, and the service rejects its absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveMovieRequest {
    pub title: String,
    pub year: Option<String>,
    pub imdb_id: Option<String>,
    pub poster: Option<String>,
    pub plot: Option<String>,
    pub rating: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReviewRequest {
    pub user_rating: i32,
    pub review: String,
}

/// One view-ready page of the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistPage {
    pub movies: Vec<MovieRecord>,
    pub current_page: u32,
    pub total_movies: u64,
    /// 1-based index of the first record shown.
    pub start: u64,
    /// Inclusive index of the last record shown; 0 when the log is empty.
    pub end: u64,
    pub sort: SortKey,
}
