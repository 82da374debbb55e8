//! HTTP implementation of the board's task service.

use gloo_net::http::Request;
use serde::Deserialize;

use taskboard::board::{ServiceError, TaskService};
use taskboard::model::Task;

const API_BASE: &str = "/api";

/// Error payload the server sends with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ServerError {
    error: String,
}

/// gloo-net backed task service talking to the API server.
#[derive(Clone, Copy, Default)]
pub struct HttpApi;

async fn error_from(response: gloo_net::http::Response) -> ServiceError {
    let status = response.status();
    let message = match response.json::<ServerError>().await {
        Ok(body) => body.error,
        Err(_) => response.status_text(),
    };
    ServiceError::Server { status, message }
}

impl TaskService for HttpApi {
    async fn list(&self) -> Result<Vec<Task>, ServiceError> {
        let response = Request::get(&format!("{API_BASE}/tasks"))
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(error_from(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ServiceError::Deserialization(e.to_string()))
    }

    async fn create(&self, task: &Task) -> Result<Task, ServiceError> {
        let response = Request::post(&format!("{API_BASE}/tasks"))
            .json(task)
            .map_err(|e| ServiceError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(error_from(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ServiceError::Deserialization(e.to_string()))
    }

    async fn replace(&self, task: &Task) -> Result<Task, ServiceError> {
        let response = Request::put(&format!("{API_BASE}/tasks/{}", task.id))
            .json(task)
            .map_err(|e| ServiceError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(error_from(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ServiceError::Deserialization(e.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let response = Request::delete(&format!("{API_BASE}/tasks/{id}"))
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(error_from(response).await);
        }

        Ok(())
    }
}
