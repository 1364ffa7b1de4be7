pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{MetadataProvider, MovieCandidate};
pub use infrastructure::OmdbClient;
