use std::sync::Arc;

use uuid::Uuid;

use super::dto::{SaveMovieRequest, SubmitReviewRequest, WatchlistPage};
use crate::modules::provider::domain::{MetadataProvider, MovieCandidate};
use crate::modules::watchlist::domain::{
    MovieRecord, MovieRepository, MovieUpdate, NewMovieRecord, SortKey,
};
use crate::shared::application::PaginationParams;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};

pub struct WatchlistService {
    movie_repo: Arc<dyn MovieRepository>,
    metadata_client: Arc<dyn MetadataProvider>,
}

impl WatchlistService {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        metadata_client: Arc<dyn MetadataProvider>,
    ) -> Self {
        Self {
            movie_repo,
            metadata_client,
        }
    }

    /// One sorted page of the log plus the counters the view needs.
    pub async fn list_movies(&self, page: Option<i64>, sort: SortKey) -> AppResult<WatchlistPage> {
        let params = PaginationParams::from_page(page);
        let (movies, total_movies) = self.movie_repo.list_page(sort, &params).await?;
        let (start, end) = params.window(total_movies);

        Ok(WatchlistPage {
            movies,
            current_page: params.page,
            total_movies,
            start,
            end,
            sort,
        })
    }

    /// Look a title up with the metadata provider. `Ok(None)` means the
    /// provider has no match; the log itself is never touched.
    pub async fn search_movie(&self, title: &str) -> AppResult<Option<MovieCandidate>> {
        let result = self.metadata_client.lookup(title).await?;
        log_debug!(
            "Search for '{}' {}",
            title,
            if result.is_some() { "matched" } else { "found nothing" }
        );
        Ok(result)
    }

    /// Save a candidate to the log. Rejects candidates without an imdb id
    /// and titles already on the watchlist.
    pub async fn save_movie(&self, request: SaveMovieRequest) -> AppResult<MovieRecord> {
        let imdb_id = match request.imdb_id.as_deref() {
            Some(id) if !id.trim().is_empty() => id.trim().to_string(),
            _ => {
                return Err(AppError::InvalidCandidate(
                    "Missing imdb id, search again before saving".to_string(),
                ))
            }
        };

        if self.movie_repo.find_by_imdb_id(&imdb_id).await?.is_some() {
            return Err(AppError::DuplicateEntry(format!(
                "'{}' is already on the watchlist",
                request.title
            )));
        }

        // Two racing saves can both pass the check above; the unique index
        // on imdb_id makes the loser fail with the same DuplicateEntry.
        let saved = self
            .movie_repo
            .insert(NewMovieRecord {
                title: request.title,
                year: request.year,
                imdb_id,
                poster: request.poster,
                plot: request.plot,
                rating: request.rating,
            })
            .await?;

        log_info!("Saved '{}' ({})", saved.title, saved.imdb_id);
        Ok(saved)
    }

    pub async fn get_movie(&self, id: &Uuid) -> AppResult<MovieRecord> {
        self.movie_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", id)))
    }

    /// Flip the watched flag and nothing else.
    pub async fn toggle_watched(&self, id: &Uuid) -> AppResult<MovieRecord> {
        let movie = self.get_movie(id).await?;
        self.movie_repo
            .update_fields(id, &MovieUpdate::watched(!movie.watched))
            .await
    }

    /// Attach a star rating and review, marking the record watched. Input is
    /// validated before anything is written so a bad request never leaves a
    /// partial update behind.
    pub async fn submit_review(
        &self,
        id: &Uuid,
        request: SubmitReviewRequest,
    ) -> AppResult<MovieRecord> {
        Validator::validate_user_rating(request.user_rating)?;
        Validator::validate_review(&request.review)?;

        self.movie_repo
            .update_fields(id, &MovieUpdate::review(request.user_rating, request.review))
            .await
    }

    pub async fn delete_movie(&self, id: &Uuid) -> AppResult<()> {
        self.movie_repo.delete_by_id(id).await
    }

    /// Remove every record. Irreversible.
    pub async fn clear_watchlist(&self) -> AppResult<u64> {
        let deleted = self.movie_repo.delete_all().await?;
        log_info!("Cleared watchlist ({} records)", deleted);
        Ok(deleted)
    }
}
