//! Read-only JSON API over a loaded blog

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::content::Post;
use crate::service::{BlogService, InMemoryBlogService};

/// Shared server state
type ServerState = Arc<InMemoryBlogService>;

/// Build the API router
pub fn router(service: Arc<InMemoryBlogService>) -> Router {
    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/:slug", get(get_post))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Start the API server
pub async fn start(service: InMemoryBlogService, ip: &str, port: u16) -> Result<()> {
    let app = router(Arc::new(service));

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_posts(State(service): State<ServerState>) -> Json<Vec<Post>> {
    Json(service.posts_sorted())
}

async fn get_post(State(service): State<ServerState>, Path(slug): Path<String>) -> Response {
    match service.post_by_slug(&slug) {
        Some(post) => Json(post).into_response(),
        None => {
            tracing::debug!("No post with slug {:?}", slug);
            (StatusCode::NOT_FOUND, Json(json!({ "error": "post not found" }))).into_response()
        }
    }
}
