pub mod modules;
mod schema;
pub mod shared;

use std::sync::Arc;

use modules::provider::{MetadataProvider, OmdbClient};
use modules::watchlist::{MovieRepository, MovieRepositoryImpl, WatchlistService};
use shared::errors::AppResult;
use shared::Database;

/// Wire a ready-to-use service from the environment: `DATABASE_URL` for the
/// Postgres pool and `OMDB_API_KEY` for the metadata provider. The
/// presentation adapter owns the process entry point; it calls this once and
/// hands the service to its handlers.
pub fn bootstrap() -> AppResult<WatchlistService> {
    dotenvy::dotenv().ok();
    shared::utils::logger::init_logger();

    let database = Arc::new(Database::new()?);
    let movie_repo: Arc<dyn MovieRepository> = Arc::new(MovieRepositoryImpl::new(database));
    let metadata_client: Arc<dyn MetadataProvider> = Arc::new(OmdbClient::new()?);

    Ok(WatchlistService::new(movie_repo, metadata_client))
}
