/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::{DateTime, Utc};
use cinelog::modules::provider::domain::MovieCandidate;
use cinelog::modules::watchlist::application::SaveMovieRequest;
use cinelog::modules::watchlist::domain::MovieRecord;
use uuid::Uuid;

pub struct MovieFactory {
    id: Uuid,
    title: String,
    year: Option<String>,
    imdb_id: String,
    poster: Option<String>,
    plot: Option<String>,
    rating: Option<String>,
    watched: bool,
    user_rating: Option<i32>,
    review: Option<String>,
    added_at: DateTime<Utc>,
}

impl Default for MovieFactory {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: "Test Movie".to_string(),
            year: Some("1999".to_string()),
            imdb_id: format!("tt{:07}", rand::random::<u32>() % 10_000_000),
            poster: None,
            plot: None,
            rating: None,
            watched: false,
            user_rating: None,
            review: None,
            added_at: Utc::now(),
        }
    }
}

impl MovieFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_imdb_id(mut self, imdb_id: &str) -> Self {
        self.imdb_id = imdb_id.to_string();
        self
    }

    pub fn watched(mut self, watched: bool) -> Self {
        self.watched = watched;
        self
    }

    pub fn with_review(mut self, user_rating: i32, review: &str) -> Self {
        self.watched = true;
        self.user_rating = Some(user_rating);
        self.review = Some(review.to_string());
        self
    }

    pub fn build(self) -> MovieRecord {
        MovieRecord {
            id: self.id,
            title: self.title,
            year: self.year,
            imdb_id: self.imdb_id,
            poster: self.poster,
            plot: self.plot,
            rating: self.rating,
            watched: self.watched,
            user_rating: self.user_rating,
            review: self.review,
            added_at: self.added_at,
        }
    }
}

pub fn candidate(title: &str, imdb_id: &str) -> MovieCandidate {
    MovieCandidate {
        title: title.to_string(),
        year: Some("1999".to_string()),
        imdb_id: imdb_id.to_string(),
        poster: Some("https://example.com/poster.jpg".to_string()),
        plot: Some("A test plot".to_string()),
        rating: Some("PG-13".to_string()),
    }
}

pub fn save_request(title: &str, imdb_id: Option<&str>) -> SaveMovieRequest {
    SaveMovieRequest {
        title: title.to_string(),
        year: Some("1999".to_string()),
        imdb_id: imdb_id.map(str::to_string),
        poster: None,
        plot: None,
        rating: None,
    }
}
