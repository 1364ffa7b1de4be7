//! Postgres-backed repository test. Runs only when `TEST_DATABASE_URL`
//! points at a throwaway database; the schema is dropped and recreated
//! on every run.

use std::env;
use std::sync::Arc;

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use uuid::Uuid;

use cinelog::modules::watchlist::domain::{
    MovieRepository, MovieUpdate, NewMovieRecord, SortKey,
};
use cinelog::modules::watchlist::infrastructure::MovieRepositoryImpl;
use cinelog::shared::application::PaginationParams;
use cinelog::shared::errors::AppError;
use cinelog::shared::Database;

fn new_record(title: &str, imdb_id: &str) -> NewMovieRecord {
    NewMovieRecord {
        title: title.to_string(),
        year: Some("1999".to_string()),
        imdb_id: imdb_id.to_string(),
        poster: None,
        plot: None,
        rating: None,
    }
}

// One sequential test so assertions never race each other on the shared
// table.
#[tokio::test]
async fn repository_round_trip_against_postgres() {
    let Ok(url) = env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set, skipping repository test");
        return;
    };

    let manager = ConnectionManager::<PgConnection>::new(url);
    let pool = Pool::builder()
        .max_size(2)
        .build(manager)
        .expect("failed to build test pool");

    {
        let mut conn = pool.get().expect("failed to get setup connection");
        conn.batch_execute("DROP TABLE IF EXISTS movies")
            .expect("failed to drop movies table");
        conn.batch_execute(include_str!("../sql/schema.sql"))
            .expect("failed to create schema");
    }

    let db = Arc::new(Database::from_pool(pool));
    let repo = MovieRepositoryImpl::new(db);

    // Insert out of alphabetical order so the title sort has work to do.
    let titles = ["Casino", "Alien", "Goodfellas", "Blade", "Fargo", "Eraserhead", "Dune"];
    let mut inserted = Vec::new();
    for (i, title) in titles.iter().enumerate() {
        let saved = repo
            .insert(new_record(title, &format!("tt00000{:02}", i)))
            .await
            .expect("insert failed");
        assert!(!saved.watched);
        assert!(saved.user_rating.is_none());
        inserted.push(saved);
    }

    // Duplicate imdb_id trips the unique index.
    let dup = repo.insert(new_record("Casino Again", "tt0000000")).await;
    assert!(matches!(dup, Err(AppError::DuplicateEntry(_))));

    // Title sort: page 1 holds A..E of 7, page 2 the rest.
    let page1 = PaginationParams::from_page(Some(1));
    let (rows, total) = repo.list_page(SortKey::Title, &page1).await.unwrap();
    assert_eq!(total, 7);
    let titles_page1: Vec<&str> = rows.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles_page1, ["Alien", "Blade", "Casino", "Dune", "Eraserhead"]);

    let page2 = PaginationParams::from_page(Some(2));
    let (rows, total) = repo.list_page(SortKey::Title, &page2).await.unwrap();
    assert_eq!(total, 7);
    let titles_page2: Vec<&str> = rows.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles_page2, ["Fargo", "Goodfellas"]);

    // Lookups by id and imdb id.
    let alien = &inserted[1];
    let found = repo.find_by_id(&alien.id).await.unwrap();
    assert_eq!(found.map(|m| m.title), Some("Alien".to_string()));
    let found = repo.find_by_imdb_id("tt0000001").await.unwrap();
    assert_eq!(found.map(|m| m.id), Some(alien.id));
    assert!(repo.find_by_imdb_id("tt9999999").await.unwrap().is_none());

    // A watched-only update leaves the rest of the row alone.
    let updated = repo
        .update_fields(&alien.id, &MovieUpdate::watched(true))
        .await
        .unwrap();
    assert!(updated.watched);
    assert!(updated.user_rating.is_none());
    assert!(updated.review.is_none());
    assert_eq!(updated.title, "Alien");

    // A review marks the row watched and stores both fields.
    let fargo = &inserted[4];
    let reviewed = repo
        .update_fields(&fargo.id, &MovieUpdate::review(5, "Pitch black and funny".to_string()))
        .await
        .unwrap();
    assert!(reviewed.watched);
    assert_eq!(reviewed.user_rating, Some(5));
    assert_eq!(reviewed.review.as_deref(), Some("Pitch black and funny"));

    // Rating sort puts the one rated row first, unrated rows after.
    let (rows, _) = repo.list_page(SortKey::Rating, &page1).await.unwrap();
    assert_eq!(rows[0].id, fargo.id);
    assert!(rows[1].user_rating.is_none());

    // Unknown ids surface as NotFound, for updates and deletes alike.
    let missing = Uuid::new_v4();
    let result = repo.update_fields(&missing, &MovieUpdate::watched(true)).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
    let result = repo.delete_by_id(&missing).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    // Delete one, then everything.
    repo.delete_by_id(&alien.id).await.unwrap();
    assert!(repo.find_by_id(&alien.id).await.unwrap().is_none());

    let deleted = repo.delete_all().await.unwrap();
    assert_eq!(deleted, 6);
    let (rows, total) = repo.list_page(SortKey::Unsorted, &page1).await.unwrap();
    assert_eq!(total, 0);
    assert!(rows.is_empty());
}
