//! Embedded frontend assets for production builds.
//!
//! In release mode: assets are embedded into the binary at compile time.
//! In debug mode: rust-embed reads from the filesystem (dist/) at runtime.

use axum::{
    body::Body,
    http::{StatusCode, Uri, header},
    response::Response,
};
use rust_embed::RustEmbed;

/// Embedded frontend assets (WASM, JS, CSS, HTML).
///
/// The folder points to Trunk's output directory.
#[derive(RustEmbed)]
#[folder = "dist/"]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.wasm"]
#[include = "*.css"]
struct FrontendAssets;

/// Serve embedded frontend assets with SPA fallback routing.
///
/// 1. Skip if the path belongs to the API or the docs
/// 2. Try an exact file match (e.g. /style.css, /app.wasm)
/// 3. Fall back to index.html for client-side routing
pub async fn serve_frontend(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    // API routes are handled by other routers
    if path.starts_with("api/") || path.starts_with("docs") {
        return Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::empty())
            .unwrap();
    }

    let asset_path = if path.is_empty() { "index.html" } else { path };

    match FrontendAssets::get(asset_path) {
        Some(content) => {
            let mime = mime_guess::from_path(asset_path).first_or_octet_stream();

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .header(header::CACHE_CONTROL, "public, max-age=31536000") // hashed assets
                .body(Body::from(content.data))
                .unwrap()
        }
        // SPA fallback: serve index.html for client-side routing
        None => match FrontendAssets::get("index.html") {
            Some(index) => Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "text/html")
                .header(header::CACHE_CONTROL, "no-cache")
                .body(Body::from(index.data))
                .unwrap(),
            None => Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(Body::from(
                    "Frontend assets not found. Run 'trunk build --release' first.",
                ))
                .unwrap(),
        },
    }
}
