use serde::{Deserialize, Serialize};

/// A lookup result that has not been saved to the watchlist yet.
///
/// The provider's `imdb_id` is authoritative: it is what the watchlist
/// checks uniqueness against when the candidate is saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieCandidate {
    pub title: String,
    pub year: Option<String>,
    pub imdb_id: String,
    pub poster: Option<String>,
    pub plot: Option<String>,
    /// Provider classification such as "PG-13".
    pub rating: Option<String>,
}
