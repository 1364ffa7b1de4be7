use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A movie saved to the watchlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: Uuid,
    pub title: String,
    pub year: Option<String>,
    pub imdb_id: String,
    pub poster: Option<String>,
    pub plot: Option<String>,
    /// Provider-supplied classification (e.g. "PG-13"), distinct from the
    /// user's own star rating.
    pub rating: Option<String>,
    pub watched: bool,
    pub user_rating: Option<i32>,
    pub review: Option<String>,
    pub added_at: DateTime<Utc>,
}

/// Payload for a new watchlist entry. The store assigns `id` and `added_at`
/// at insert time; `watched` starts false and the review fields start empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMovieRecord {
    pub title: String,
    pub year: Option<String>,
    pub imdb_id: String,
    pub poster: Option<String>,
    pub plot: Option<String>,
    pub rating: Option<String>,
}

/// Partial update applied to a record. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieUpdate {
    pub watched: Option<bool>,
    pub user_rating: Option<i32>,
    pub review: Option<String>,
}

impl MovieUpdate {
    /// Flip only the watched flag.
    pub fn watched(watched: bool) -> Self {
        Self {
            watched: Some(watched),
            ..Self::default()
        }
    }

    /// Submitting a review always marks the record watched.
    pub fn review(user_rating: i32, review: String) -> Self {
        Self {
            watched: Some(true),
            user_rating: Some(user_rating),
            review: Some(review),
        }
    }
}
