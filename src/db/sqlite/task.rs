//! SQLite TaskRepository implementation.

use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::{Row, SqlitePool};

use crate::db::utils::{current_timestamp, generate_task_id};
use crate::db::{DbError, DbResult, TaskRecord, TaskRepository};
use crate::model::{Task, TaskStatus};

/// SQLx-backed task repository.
pub struct SqliteTaskRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

const COLUMNS: &str = "id, title, category, status, due_date, created_at, updated_at";

impl TaskRepository for SqliteTaskRepository<'_> {
    async fn list(&self) -> DbResult<Vec<TaskRecord>> {
        // Ids are epoch milliseconds, so id order is creation order.
        let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM task ORDER BY id"))
            .fetch_all(self.pool)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        rows.iter().map(row_to_record).collect()
    }

    async fn create(&self, task: &Task) -> DbResult<TaskRecord> {
        validate(task)?;

        // Use the client-minted id when present, otherwise mint one.
        let id = if task.id == 0 {
            generate_task_id()
        } else {
            task.id
        };

        let now = current_timestamp();
        let due_date = task.due_date.map(|d| d.to_string());

        sqlx::query(
            r#"
            INSERT INTO task (id, title, category, status, due_date, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&task.title)
        .bind(&task.category)
        .bind(task.status.as_str())
        .bind(&due_date)
        .bind(&now)
        .bind(&now)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                DbError::AlreadyExists { id }
            } else {
                DbError::Database {
                    message: e.to_string(),
                }
            }
        })?;

        Ok(TaskRecord {
            id,
            title: task.title.clone(),
            category: task.category.clone(),
            status: task.status,
            due_date: task.due_date,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    async fn replace(&self, task: &Task) -> DbResult<TaskRecord> {
        validate(task)?;

        let due_date = task.due_date.map(|d| d.to_string());

        let row = sqlx::query(&format!(
            r#"
            UPDATE task
            SET title = ?, category = ?, status = ?, due_date = ?, updated_at = ?
            WHERE id = ?
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&task.title)
        .bind(&task.category)
        .bind(task.status.as_str())
        .bind(&due_date)
        .bind(current_timestamp())
        .bind(task.id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        let row = row.ok_or(DbError::NotFound { id: task.id })?;
        row_to_record(&row)
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        // Deleting an absent id succeeds: the desired state is reached.
        sqlx::query("DELETE FROM task WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        Ok(())
    }
}

fn validate(task: &Task) -> DbResult<()> {
    if task.title.trim().is_empty() {
        return Err(DbError::Validation {
            message: "title must not be empty".to_string(),
        });
    }
    if task.category.trim().is_empty() {
        return Err(DbError::Validation {
            message: "category must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Convert a database row to a task record.
fn row_to_record(row: &sqlx::sqlite::SqliteRow) -> DbResult<TaskRecord> {
    let status_str: String = row.get("status");
    let status = TaskStatus::from_str(&status_str).map_err(|e| DbError::InvalidData {
        message: e.to_string(),
        help: "expected 'To Do', 'In Progress' or 'Completed'".to_string(),
    })?;

    let due_date: Option<String> = row.get("due_date");
    let due_date = due_date
        .map(|s| {
            NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|e| DbError::InvalidData {
                message: format!("bad due_date '{s}': {e}"),
                help: "expected YYYY-MM-DD".to_string(),
            })
        })
        .transpose()?;

    Ok(TaskRecord {
        id: row.get("id"),
        title: row.get("title"),
        category: row.get("category"),
        status,
        due_date,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}
