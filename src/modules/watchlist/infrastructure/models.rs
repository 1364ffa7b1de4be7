use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::movies;

/// DB row model (read)
#[derive(Queryable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = movies)]
pub struct MovieModel {
    pub id: Uuid,
    pub title: String,
    pub year: Option<String>,
    pub imdb_id: String,
    pub poster: Option<String>,
    pub plot: Option<String>,
    pub rating: Option<String>,
    pub watched: bool,
    pub user_rating: Option<i32>,
    pub review: Option<String>,
    pub added_at: DateTime<Utc>,
}

/// Insert payload (write)
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct NewMovieModel {
    pub id: Uuid,
    pub title: String,
    pub year: Option<String>,
    pub imdb_id: String,
    pub poster: Option<String>,
    pub plot: Option<String>,
    pub rating: Option<String>,
    pub watched: bool,
    pub added_at: DateTime<Utc>,
}

/// Update payload (write). `None` fields are not written, which is what
/// gives the store its partial-update semantics.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = movies)]
pub struct MovieChangeset {
    pub watched: Option<bool>,
    pub user_rating: Option<i32>,
    pub review: Option<String>,
}
