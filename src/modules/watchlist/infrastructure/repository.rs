use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::models::{MovieChangeset, MovieModel, NewMovieModel};
use crate::modules::watchlist::domain::{
    MovieRecord, MovieRepository, MovieUpdate, NewMovieRecord, SortKey,
};
use crate::schema::movies;
use crate::shared::application::PaginationParams;
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};

pub struct MovieRepositoryImpl {
    db: Arc<Database>,
}

impl MovieRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn model_to_entity(model: MovieModel) -> MovieRecord {
        MovieRecord {
            id: model.id,
            title: model.title,
            year: model.year,
            imdb_id: model.imdb_id,
            poster: model.poster,
            plot: model.plot,
            rating: model.rating,
            watched: model.watched,
            user_rating: model.user_rating,
            review: model.review,
            added_at: model.added_at,
        }
    }

    fn new_record_to_model(movie: NewMovieRecord) -> NewMovieModel {
        NewMovieModel {
            id: Uuid::new_v4(),
            title: movie.title,
            year: movie.year,
            imdb_id: movie.imdb_id,
            poster: movie.poster,
            plot: movie.plot,
            rating: movie.rating,
            watched: false,
            added_at: Utc::now(),
        }
    }

    fn update_to_changeset(update: &MovieUpdate) -> MovieChangeset {
        MovieChangeset {
            watched: update.watched,
            user_rating: update.user_rating,
            review: update.review.clone(),
        }
    }
}

#[async_trait]
impl MovieRepository for MovieRepositoryImpl {
    async fn insert(&self, movie: NewMovieRecord) -> AppResult<MovieRecord> {
        let db = Arc::clone(&self.db);
        let new_row = Self::new_record_to_model(movie);

        let model = task::spawn_blocking(move || -> AppResult<MovieModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(movies::table)
                .values(&new_row)
                .get_result::<MovieModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(Self::model_to_entity(model))
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<MovieRecord>> {
        let db = Arc::clone(&self.db);
        let id = *id;

        let model = task::spawn_blocking(move || -> AppResult<Option<MovieModel>> {
            let mut conn = db.get_connection()?;
            let m = movies::table
                .filter(movies::id.eq(id))
                .first::<MovieModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Self::model_to_entity))
    }

    async fn find_by_imdb_id(&self, imdb_id: &str) -> AppResult<Option<MovieRecord>> {
        let db = Arc::clone(&self.db);
        let imdb_id = imdb_id.to_string();

        let model = task::spawn_blocking(move || -> AppResult<Option<MovieModel>> {
            let mut conn = db.get_connection()?;
            let m = movies::table
                .filter(movies::imdb_id.eq(&imdb_id))
                .first::<MovieModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Self::model_to_entity))
    }

    async fn list_page(
        &self,
        sort: SortKey,
        page: &PaginationParams,
    ) -> AppResult<(Vec<MovieRecord>, u64)> {
        let db = Arc::clone(&self.db);
        let offset = page.offset();
        let limit = page.limit();

        let (models, total) = task::spawn_blocking(move || -> AppResult<(Vec<MovieModel>, i64)> {
            let mut conn = db.get_connection()?;

            let total = movies::table.count().get_result::<i64>(&mut conn)?;

            // Every order carries an id tie-break so equal keys (including
            // records added in the same instant) page deterministically.
            let query = movies::table.into_boxed();
            let query = match sort {
                SortKey::Title => query.order(movies::title.asc()),
                SortKey::Date => query.order(movies::added_at.desc()),
                SortKey::Rating => query.order(movies::user_rating.desc().nulls_last()),
                SortKey::Watched => query.order(movies::watched.desc()),
                SortKey::Unsorted => query.order(movies::added_at.asc()),
            };

            let rows = query
                .then_order_by(movies::id.asc())
                .offset(offset)
                .limit(limit)
                .load::<MovieModel>(&mut conn)?;

            Ok((rows, total))
        })
        .await??;

        let records = models.into_iter().map(Self::model_to_entity).collect();
        Ok((records, total as u64))
    }

    async fn update_fields(&self, id: &Uuid, update: &MovieUpdate) -> AppResult<MovieRecord> {
        let db = Arc::clone(&self.db);
        let id = *id;
        let changes = Self::update_to_changeset(update);

        // Diesel rejects an empty changeset outright; an update with nothing
        // to write degrades to a lookup.
        if changes.watched.is_none() && changes.user_rating.is_none() && changes.review.is_none() {
            return self
                .find_by_id(&id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", id)));
        }

        let model = task::spawn_blocking(move || -> AppResult<Option<MovieModel>> {
            let mut conn = db.get_connection()?;
            let m = diesel::update(movies::table.filter(movies::id.eq(id)))
                .set(&changes)
                .get_result::<MovieModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        model
            .map(Self::model_to_entity)
            .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", id)))
    }

    async fn delete_by_id(&self, id: &Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = *id;

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let deleted =
                diesel::delete(movies::table.filter(movies::id.eq(id))).execute(&mut conn)?;
            if deleted == 0 {
                return Err(AppError::NotFound(format!("Movie with ID {} not found", id)));
            }
            Ok(())
        })
        .await?
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<u64> {
            let mut conn = db.get_connection()?;
            let deleted = diesel::delete(movies::table).execute(&mut conn)?;
            Ok(deleted as u64)
        })
        .await?
    }
}
