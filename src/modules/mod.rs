pub mod provider;
pub mod watchlist;
