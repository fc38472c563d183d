use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::{
    row::{Row, RowId},
    store::RowStore,
};

const INDEX_PAGE: &str = include_str!("index.html");

type SharedStore = Arc<RowStore>;

/// Builds the application router around a shared store.
///
/// Path and body parsing is left to axum's extractors, so a non-integer id
/// or a malformed payload is rejected before any handler runs.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/rows", get(list_rows).post(create_row))
        .route("/rows/:id", get(get_row).delete(delete_row))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

async fn list_rows(State(store): State<SharedStore>) -> Json<Vec<Row>> {
    Json(store.list().await)
}

/// Answers with the first row carrying `id`, or `null` when none does.
async fn get_row(State(store): State<SharedStore>, Path(id): Path<RowId>) -> Json<Option<Row>> {
    let row = store.get(id).await;
    if row.is_none() {
        debug!(id, "row not found");
    }
    Json(row)
}

async fn create_row(State(store): State<SharedStore>, Json(row): Json<Row>) -> Json<Row> {
    let row = store.create(row).await;
    info!(id = row.id, "row created");
    Json(row)
}

async fn delete_row(State(store): State<SharedStore>, Path(id): Path<RowId>) -> StatusCode {
    let removed = store.delete(id).await;
    info!(id, removed, "rows deleted");
    StatusCode::OK
}
