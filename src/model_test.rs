//! Wire-format tests for the shared task model.

use chrono::NaiveDate;
use serde_json::json;

use crate::model::{Task, TaskStatus};

#[test]
fn status_serializes_to_wire_literals() {
    assert_eq!(
        serde_json::to_value(TaskStatus::ToDo).unwrap(),
        json!("To Do")
    );
    assert_eq!(
        serde_json::to_value(TaskStatus::InProgress).unwrap(),
        json!("In Progress")
    );
    assert_eq!(
        serde_json::to_value(TaskStatus::Completed).unwrap(),
        json!("Completed")
    );
}

#[test]
fn status_rejects_unknown_literals() {
    assert!(serde_json::from_value::<TaskStatus>(json!("Urgent")).is_err());
    assert!(serde_json::from_value::<TaskStatus>(json!("to do")).is_err());
    assert!(serde_json::from_value::<TaskStatus>(json!("")).is_err());
}

#[test]
fn status_parses_from_str() {
    assert_eq!("In Progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
    let err = "done".parse::<TaskStatus>().unwrap_err();
    assert_eq!(err.to_string(), "unknown task status 'done'");
}

#[test]
fn task_uses_wire_field_names() {
    let task = Task {
        id: 1001,
        title: "Write spec".to_string(),
        category: "Docs".to_string(),
        status: TaskStatus::ToDo,
        due_date: NaiveDate::from_ymd_opt(2025, 6, 1),
    };

    let value = serde_json::to_value(&task).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 1001,
            "title": "Write spec",
            "category": "Docs",
            "status": "To Do",
            "dueDate": "2025-06-01"
        })
    );
}

#[test]
fn due_date_is_omitted_when_absent() {
    let task = Task {
        id: 1,
        title: "t".to_string(),
        category: "c".to_string(),
        status: TaskStatus::Completed,
        due_date: None,
    };

    let value = serde_json::to_value(&task).unwrap();
    assert!(value.get("dueDate").is_none());
}

#[test]
fn task_decodes_with_default_status_and_ignores_extras() {
    // The backend echoes createdAt/updatedAt; the client model ignores them.
    let task: Task = serde_json::from_value(json!({
        "id": 7,
        "title": "t",
        "category": "c",
        "createdAt": "2025-01-01 00:00:00",
        "updatedAt": "2025-01-01 00:00:00"
    }))
    .unwrap();

    assert_eq!(task.status, TaskStatus::ToDo);
    assert_eq!(task.due_date, None);
}
