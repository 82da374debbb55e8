//! Tests for the SQLite task repository.

use chrono::NaiveDate;

use crate::db::{Database, DbError, TaskRepository, sqlite::SqliteDatabase};
use crate::model::{Task, TaskStatus};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn task(id: i64, title: &str) -> Task {
    Task {
        id,
        title: title.to_string(),
        category: "Work".to_string(),
        status: TaskStatus::ToDo,
        due_date: None,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn create_keeps_client_minted_id() {
    let db = setup_db().await;
    let tasks = db.tasks();

    let record = tasks
        .create(&task(1717171717000, "Write report"))
        .await
        .expect("Create should succeed");

    assert_eq!(record.id, 1717171717000);
    assert_eq!(record.title, "Write report");
    assert!(!record.created_at.is_empty());
    assert_eq!(record.created_at, record.updated_at);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_mints_id_when_zero() {
    let db = setup_db().await;
    let tasks = db.tasks();

    let record = tasks
        .create(&task(0, "Write report"))
        .await
        .expect("Create should succeed");

    assert!(record.id > 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_duplicate_id() {
    let db = setup_db().await;
    let tasks = db.tasks();

    tasks
        .create(&task(42, "First"))
        .await
        .expect("Create should succeed");
    let err = tasks
        .create(&task(42, "Second"))
        .await
        .expect_err("Duplicate id should be rejected");

    assert!(matches!(err, DbError::AlreadyExists { id: 42 }));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_blank_title() {
    let db = setup_db().await;
    let tasks = db.tasks();

    let err = tasks
        .create(&task(1, "   "))
        .await
        .expect_err("Blank title should be rejected");

    assert!(matches!(err, DbError::Validation { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_returns_tasks_in_id_order() {
    let db = setup_db().await;
    let tasks = db.tasks();

    tasks.create(&task(3, "c")).await.expect("Create");
    tasks.create(&task(1, "a")).await.expect("Create");
    tasks.create(&task(2, "b")).await.expect("Create");

    let listed = tasks.list().await.expect("List should succeed");
    let ids: Vec<i64> = listed.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test(flavor = "multi_thread")]
async fn replace_updates_every_field_and_bumps_updated_at() {
    let db = setup_db().await;
    let tasks = db.tasks();

    let created = tasks.create(&task(7, "Old")).await.expect("Create");

    let replaced = tasks
        .replace(&Task {
            id: 7,
            title: "New".to_string(),
            category: "Home".to_string(),
            status: TaskStatus::Completed,
            due_date: NaiveDate::from_ymd_opt(2025, 12, 24),
        })
        .await
        .expect("Replace should succeed");

    assert_eq!(replaced.title, "New");
    assert_eq!(replaced.category, "Home");
    assert_eq!(replaced.status, TaskStatus::Completed);
    assert_eq!(replaced.due_date, NaiveDate::from_ymd_opt(2025, 12, 24));
    assert_eq!(replaced.created_at, created.created_at);
}

#[tokio::test(flavor = "multi_thread")]
async fn replace_of_absent_task_is_not_found() {
    let db = setup_db().await;
    let tasks = db.tasks();

    let err = tasks
        .replace(&task(999, "Ghost"))
        .await
        .expect_err("Absent id should be NotFound");

    assert!(matches!(err, DbError::NotFound { id: 999 }));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_is_idempotent() {
    let db = setup_db().await;
    let tasks = db.tasks();

    tasks.create(&task(5, "Ephemeral")).await.expect("Create");

    tasks.delete(5).await.expect("First delete should succeed");
    tasks.delete(5).await.expect("Second delete should succeed");

    assert!(tasks.list().await.expect("List").is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn due_date_round_trips_through_storage() {
    let db = setup_db().await;
    let tasks = db.tasks();

    let mut t = task(9, "Dated");
    t.due_date = NaiveDate::from_ymd_opt(2025, 6, 1);
    tasks.create(&t).await.expect("Create");

    let listed = tasks.list().await.expect("List");
    assert_eq!(listed[0].due_date, NaiveDate::from_ymd_opt(2025, 6, 1));
}
