use super::assets::INDEX_HTML;
use super::data::FlowchartData;
use crate::config::Theme;
use crate::layout::Direction;
use crate::model::{HierarchyNode, RepoRef};
use crate::style;
use axum::{
    Json, Router,
    extract::{Query, State},
    response::{Html, IntoResponse},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// State shared across handlers. The fetched hierarchy is retained
/// immutably; the flowchart is laid out from scratch on every request.
pub struct ServeState {
    pub hierarchy: Vec<HierarchyNode>,
    pub repo: RepoRef,
    pub theme: Theme,
    pub direction: Direction,
}

#[derive(Deserialize)]
struct GraphQuery {
    direction: Option<String>,
}

/// Start the HTTP server for the interactive flowchart viewer.
pub async fn serve(
    state: ServeState,
    port: u16,
    open_browser: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let label = state.repo.label();
    let state = Arc::new(state);

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/api/graph", get(graph_handler))
        .layer(cors)
        .with_state(state);

    let addr = format!("127.0.0.1:{}", port);
    let url = format!("http://{}", addr);

    style::status(&format!("Serving flowchart for {label}"));
    println!("Open in browser: {}", style::url(&url));
    println!("Press Ctrl+C to stop");

    if open_browser
        && let Err(e) = open::that(&url)
    {
        style::warning(&format!("Could not open browser: {}", e));
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index_handler() -> impl IntoResponse {
    Html(INDEX_HTML)
}

async fn graph_handler(
    State(state): State<Arc<ServeState>>,
    Query(query): Query<GraphQuery>,
) -> impl IntoResponse {
    // An unknown or absent direction falls back to the CLI-selected one.
    let direction: Direction = query
        .direction
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(state.direction);

    Json(FlowchartData::build(
        &state.hierarchy,
        &state.repo,
        direction,
        state.theme,
    ))
}
