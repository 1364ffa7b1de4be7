use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{MovieRecord, MovieUpdate, NewMovieRecord};
use super::value_objects::SortKey;
use crate::shared::application::PaginationParams;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Persist a new record, assigning its id and `added_at`. A duplicate
    /// `imdb_id` fails with `DuplicateEntry` via the unique index.
    async fn insert(&self, movie: NewMovieRecord) -> AppResult<MovieRecord>;

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<MovieRecord>>;

    async fn find_by_imdb_id(&self, imdb_id: &str) -> AppResult<Option<MovieRecord>>;

    /// One page of the sorted collection plus the full collection count.
    async fn list_page(
        &self,
        sort: SortKey,
        page: &PaginationParams,
    ) -> AppResult<(Vec<MovieRecord>, u64)>;

    /// Apply only the fields present in `update`, leaving others untouched.
    async fn update_fields(&self, id: &Uuid, update: &MovieUpdate) -> AppResult<MovieRecord>;

    async fn delete_by_id(&self, id: &Uuid) -> AppResult<()>;

    /// Remove every record, returning how many were deleted.
    async fn delete_all(&self) -> AppResult<u64>;
}
