//! JSON item endpoints
//!
//! Same data as the pages: `GET /api/items` returns the list payload
//! (`items` plus the echoed `search`), the rest is plain CRUD.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::SearchParams;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidItemId, ValidJson};
use crate::http::server::AppState;
use crate::models::{Item, ItemDraft, SearchTerm};

/// Create/update item request
#[derive(Deserialize)]
pub struct ItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ItemRequest {
    fn into_draft(self) -> Result<ItemDraft, ApiError> {
        Ok(ItemDraft::new(self.name.as_deref(), self.description.as_deref())?)
    }
}

/// List response
#[derive(Serialize)]
pub struct ItemListResponse {
    pub items: Vec<Item>,
    pub search: String,
}

/// GET /api/items - list items, filtered by `q`
async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ItemListResponse>, ApiError> {
    let search = params.q.unwrap_or_default();
    let items = state.store.list(SearchTerm::parse(Some(&search)).as_ref()).await?;

    Ok(Json(ItemListResponse { items, search }))
}

/// POST /api/items - create an item
async fn create_item(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<ItemRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = state.store.create(req.into_draft()?).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/items/{id} - get a single item
async fn get_item(
    State(state): State<Arc<AppState>>,
    ValidItemId(id): ValidItemId,
) -> Result<Json<Item>, ApiError> {
    let item = state.store.get(&id).await?.ok_or_else(|| ApiError::NotFound {
        resource: "item",
        id: id.to_string(),
    })?;

    Ok(Json(item))
}

/// PUT /api/items/{id} - replace name and description
async fn update_item(
    State(state): State<Arc<AppState>>,
    ValidItemId(id): ValidItemId,
    ValidJson(req): ValidJson<ItemRequest>,
) -> Result<Json<Item>, ApiError> {
    let item = state.store.update(&id, req.into_draft()?).await?;
    Ok(Json(item))
}

/// DELETE /api/items/{id} - delete an item (idempotent)
async fn delete_item(
    State(state): State<Arc<AppState>>,
    ValidItemId(id): ValidItemId,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// API routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::db::MemoryItemStore;

    fn app() -> Router {
        router().with_state(Arc::new(AppState::new(Arc::new(MemoryItemStore::new()))))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_then_fetch() {
        let app = app();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/items", json!({ "name": "Milk" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["description"], "");

        let id = created["id"].as_str().unwrap();
        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/items/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);
    }

    #[tokio::test]
    async fn list_echoes_search() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/items?q=zzz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "items": [], "search": "zzz" }));
    }

    #[tokio::test]
    async fn empty_name_is_validation_error() {
        let response = app()
            .oneshot(json_request("POST", "/api/items", json!({ "name": "" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "validation_error");
    }

    #[tokio::test]
    async fn malformed_body_is_json_validation_error() {
        let app = app();
        let bad_requests = [
            Request::builder()
                .method("POST")
                .uri("/api/items")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
            json_request("POST", "/api/items", json!({ "name": 42 })),
            Request::builder()
                .method("POST")
                .uri("/api/items")
                .body(Body::from(r#"{"name":"Milk"}"#))
                .unwrap(),
        ];

        for request in bad_requests {
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                response.headers()[header::CONTENT_TYPE],
                "application/json"
            );
            let body = body_json(response).await;
            assert_eq!(body["error"], "validation_error");
            assert_eq!(body["message"], "Invalid form data");
        }
    }

    #[tokio::test]
    async fn update_unknown_item_is_404() {
        let uri = format!("/api/items/{}", crate::models::ItemId::generate());
        let response = app()
            .oneshot(json_request("PUT", &uri, json!({ "name": "Ghost" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "not_found");
    }

    #[tokio::test]
    async fn delete_is_no_content() {
        let uri = format!("/api/items/{}", crate::models::ItemId::generate());
        let response = app()
            .oneshot(Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
