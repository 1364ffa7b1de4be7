pub mod omdb;

pub use omdb::OmdbClient;
