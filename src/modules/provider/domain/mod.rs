pub mod candidate;
pub mod client;

pub use candidate::MovieCandidate;
pub use client::MetadataProvider;
