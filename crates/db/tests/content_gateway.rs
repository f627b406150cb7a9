//! Integration tests for the `contents` repository and the PostgreSQL gateway.
//!
//! Exercises the full persistence layer against a real database:
//! - Create/read/update/delete through `PgContentGateway`
//! - `COALESCE` partial updates leave unset columns alone
//! - Deleting a missing id is not an error
//! - The duration check constraint
//!
//! Needs a reachable PostgreSQL via `DATABASE_URL`; run with
//! `cargo test -p catalog-db -- --ignored`.

use catalog_core::content::{Content, ContentDto};
use catalog_core::gateway::Gateway;
use catalog_db::repositories::ContentRepo;
use catalog_db::PgContentGateway;
use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_content(title: &str, genres: &[&str]) -> ContentDto {
    ContentDto {
        title: Some(title.to_string()),
        subtitle: Some("Subtitle".to_string()),
        description: Some("Description".to_string()),
        image_url: Some("https://image.com/1".to_string()),
        duration: Some(120),
        start_time: Some(Utc.with_ymd_and_hms(2024, 3, 9, 20, 0, 0).unwrap()),
        end_time: Some(Utc.with_ymd_and_hms(2024, 3, 9, 22, 0, 0).unwrap()),
        genre_list: Some(genres.iter().map(|g| g.to_string()).collect()),
    }
}

// ---------------------------------------------------------------------------
// Gateway CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_then_read_round_trips_every_field(pool: PgPool) {
    let gateway = PgContentGateway::new(pool);
    let dto = new_content("Title 1", &["Drama", "Thriller"]);

    let created = gateway.create(dto.clone()).await.unwrap().unwrap();
    assert_eq!(Some(created.title.clone()), dto.title);
    assert_eq!(Some(created.duration), dto.duration);
    assert_eq!(Some(created.start_time), dto.start_time);
    assert_eq!(Some(created.genre_list.clone()), dto.genre_list);

    let fetched = gateway.read(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_assigns_distinct_ids(pool: PgPool) {
    let gateway = PgContentGateway::new(pool);

    let a = gateway.create(new_content("A", &[])).await.unwrap().unwrap();
    let b = gateway.create(new_content("A", &[])).await.unwrap().unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(gateway.read_all().await.unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn read_all_on_empty_table_is_empty(pool: PgPool) {
    let gateway = PgContentGateway::new(pool);
    assert!(gateway.read_all().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_only_touches_provided_fields(pool: PgPool) {
    let gateway = PgContentGateway::new(pool);
    let created = gateway
        .create(new_content("Original", &["Drama"]))
        .await
        .unwrap()
        .unwrap();

    let patch = ContentDto {
        title: Some("Updated".to_string()),
        description: Some(String::new()),
        ..ContentDto::default()
    };
    let updated = gateway.update(created.id, patch).await.unwrap().unwrap();

    assert_eq!(updated.title, "Updated");
    assert_eq!(updated.description, "");
    assert_eq!(updated.subtitle, created.subtitle);
    assert_eq!(updated.genre_list, created.genre_list);
    assert_eq!(updated.end_time, created.end_time);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_missing_id_returns_none(pool: PgPool) {
    let gateway = PgContentGateway::new(pool);
    let result = gateway
        .update(Uuid::new_v4(), new_content("Nope", &[]))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn delete_returns_id_whether_or_not_it_existed(pool: PgPool) {
    let gateway = PgContentGateway::new(pool);
    let created = gateway
        .create(new_content("Delete Me", &[]))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(gateway.delete(created.id).await.unwrap(), created.id);
    assert!(gateway.read(created.id).await.unwrap().is_none());

    let missing = Uuid::new_v4();
    assert_eq!(gateway.delete(missing).await.unwrap(), missing);
}

// ---------------------------------------------------------------------------
// Repository-level behaviour
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn insert_with_taken_id_yields_no_row(pool: PgPool) {
    let content = Content::from_dto(Uuid::new_v4(), new_content("Twice", &[]));

    let first = ContentRepo::create(&pool, &content).await.unwrap();
    let second = ContentRepo::create(&pool, &content).await.unwrap();

    assert!(first.is_some());
    assert!(second.is_none());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn negative_duration_violates_check_constraint(pool: PgPool) {
    let mut content = Content::from_dto(Uuid::new_v4(), new_content("Bad", &[]));
    content.duration = -1;

    let err = ContentRepo::create(&pool, &content).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("ck_contents_duration_non_negative"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_bumps_updated_at(pool: PgPool) {
    let content = Content::from_dto(Uuid::new_v4(), new_content("Stamp", &[]));
    let inserted = ContentRepo::create(&pool, &content).await.unwrap().unwrap();

    let updated = ContentRepo::update(&pool, content.id, &ContentDto::genres_only(vec!["x".into()]))
        .await
        .unwrap()
        .unwrap();

    assert!(updated.updated_at >= inserted.updated_at);
    assert_eq!(updated.created_at, inserted.created_at);
    assert_eq!(updated.genre_list, vec!["x".to_string()]);
}
