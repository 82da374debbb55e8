//! Tests for SQLite database connection and migrations.

use crate::db::{Database, sqlite::SqliteDatabase};

#[tokio::test(flavor = "multi_thread")]
async fn migrate_creates_task_table() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("Migration should succeed");

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Query should succeed");

    // _sqlx_migrations is created by sqlx for migration tracking.
    for table in ["_sqlx_migrations", "task"] {
        assert!(
            tables.iter().any(|t| t == table),
            "Missing table: {}. Found tables: {:?}",
            table,
            tables
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_is_idempotent() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("First migration should succeed");
    db.migrate().await.expect("Second migration should succeed");
}

#[tokio::test(flavor = "multi_thread")]
async fn schema_rejects_unknown_status() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");

    let result = sqlx::query(
        "INSERT INTO task (id, title, category, status, created_at, updated_at)
         VALUES (1, 't', 'c', 'Done', '2025-01-01 00:00:00', '2025-01-01 00:00:00')",
    )
    .execute(db.pool())
    .await;

    assert!(result.is_err(), "CHECK constraint should reject 'Done'");
}
