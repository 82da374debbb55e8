//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::state::AppState;
use super::static_assets;
use super::system::{self, HealthResponse, RootResponse};
use super::tasks::{self, ErrorResponse, TaskRequest, TaskResponse};
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskboard API",
        version = "0.3.0",
        description = "Kanban-style task management API",
        license(name = "GPL-2.0")
    ),
    paths(
        system::root,
        system::health,
        tasks::list_tasks,
        tasks::create_task,
        tasks::replace_task,
        tasks::delete_task,
    ),
    components(schemas(RootResponse, HealthResponse, TaskResponse, TaskRequest, ErrorResponse)),
    tags(
        (name = "system", description = "System health endpoints"),
        (name = "tasks", description = "Task management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation.
///
/// With `serve_frontend` the embedded single-page app is served for
/// every path no other route claims.
pub fn create_router<D: Database + 'static>(state: AppState<D>, serve_frontend: bool) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new().route("/health", get(system::health));

    // Task routes (generic over Database)
    let task_routes = routes!(D => {
        get "/api/tasks" => tasks::list_tasks,
        post "/api/tasks" => tasks::create_task,
        put "/api/tasks/{id}" => tasks::replace_task,
        delete "/api/tasks/{id}" => tasks::delete_task,
    });

    let router = system_routes
        .merge(task_routes)
        .merge(Scalar::with_url("/docs", api));

    // "/" either serves the SPA (production) or a JSON acknowledgment.
    let router = if serve_frontend {
        router.fallback(static_assets::serve_frontend)
    } else {
        router.route("/", get(system::root))
    };

    router.with_state(state)
}
