pub mod dto;
pub mod service;

pub use dto::{SaveMovieRequest, SubmitReviewRequest, WatchlistPage};
pub use service::WatchlistService;
