use axum::Json;
use serde_json::{Value, json};

/// Handler for `GET /` — the landing page context.
pub async fn index() -> Json<Value> {
    Json(json!({
        "page": "index",
        "inventory_url": "/inventory/",
    }))
}
