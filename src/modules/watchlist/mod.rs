pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{SaveMovieRequest, SubmitReviewRequest, WatchlistPage, WatchlistService};
pub use domain::{MovieRecord, MovieRepository, SortKey};
pub use infrastructure::MovieRepositoryImpl;
