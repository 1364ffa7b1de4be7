pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{MovieRecord, MovieUpdate, NewMovieRecord};
pub use repository::MovieRepository;
pub use value_objects::SortKey;
