//! Item detail page
//!
//! GET renders the edit form for one item. POST updates it
//! (`intent=update`) or deletes it (`intent=delete`), then redirects back to
//! the list.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};

use super::{back_to_list, ItemForm};
use crate::http::error::PageError;
use crate::http::render::{self, EditView};
use crate::http::server::AppState;
use crate::models::{Intent, ItemDraft, ItemId};

/// A malformed id cannot name a stored item.
fn parse_id(raw: &str) -> Result<ItemId, PageError> {
    ItemId::parse(raw).map_err(|_| PageError::NotFound)
}

/// GET /items/{id} - edit form
async fn show_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = parse_id(&id)?;
    let item = state.store.get(&id).await?.ok_or(PageError::NotFound)?;

    Ok(Html(render::edit_page(&EditView::for_item(&item))))
}

/// POST /items/{id} - update or delete
async fn submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<ItemForm>,
) -> Result<Response, PageError> {
    let id = parse_id(&id)?;

    if Intent::from_field(form.intent.as_deref()) == Intent::Delete {
        state.store.delete(&id).await?;
        tracing::info!(id = %id, "Item deleted");
        return Ok(back_to_list());
    }

    match ItemDraft::new(form.name.as_deref(), form.description.as_deref()) {
        Ok(draft) => {
            state.store.update(&id, draft).await?;
            tracing::info!(id = %id, "Item updated");
            Ok(back_to_list())
        }
        Err(err) => {
            tracing::debug!(id = %id, "Rejected item update: {}", err);
            let page = render::edit_page(&EditView {
                id: &id,
                name: form.name.as_deref().unwrap_or_default(),
                description: form.description.as_deref().unwrap_or_default(),
                error: Some(&err.to_string()),
            });
            Ok((StatusCode::BAD_REQUEST, Html(page)).into_response())
        }
    }
}

/// Detail page routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/items/{id}", get(show_item).post(submit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use tower::ServiceExt;

    use crate::db::{ItemStore, MemoryItemStore};
    use crate::models::Item;

    fn app(store: Arc<MemoryItemStore>) -> Router {
        router().with_state(Arc::new(AppState::new(store)))
    }

    async fn seeded() -> (Arc<MemoryItemStore>, Item) {
        let store = Arc::new(MemoryItemStore::new());
        let item = store
            .create(ItemDraft::new(Some("Milk"), Some("whole")).unwrap())
            .await
            .unwrap();
        (store, item)
    }

    fn post_form(id: &ItemId, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/items/{}", id))
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    #[tokio::test]
    async fn shows_edit_form() {
        let (store, item) = seeded().await;
        let response = app(store)
            .oneshot(
                Request::builder()
                    .uri(format!("/items/{}", item.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8_lossy(&bytes);
        assert!(html.contains("value=\"Milk\""));
        assert!(html.contains("value=\"whole\""));
    }

    #[tokio::test]
    async fn unknown_and_malformed_ids_are_404() {
        let store = Arc::new(MemoryItemStore::new());
        for uri in [format!("/items/{}", ItemId::generate()), "/items/nope".to_string()] {
            let response = app(store.clone())
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn update_changes_only_description() {
        let (store, item) = seeded().await;
        let response = app(store.clone())
            .oneshot(post_form(&item.id, "intent=update&name=Milk&description=skimmed"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let stored = store.get(&item.id).await.unwrap().unwrap();
        assert_eq!(stored.id, item.id);
        assert_eq!(stored.name, "Milk");
        assert_eq!(stored.description, "skimmed");
    }

    #[tokio::test]
    async fn invalid_update_rerenders_form() {
        let (store, item) = seeded().await;
        let response = app(store.clone())
            .oneshot(post_form(&item.id, "intent=update&name=&description=changed"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8_lossy(&bytes);
        assert!(html.contains("name cannot be empty"));
        assert!(html.contains("value=\"changed\""));

        // Nothing persisted
        assert_eq!(store.get(&item.id).await.unwrap(), Some(item));
    }

    #[tokio::test]
    async fn update_of_deleted_item_is_404() {
        let (store, item) = seeded().await;
        store.delete(&item.id).await.unwrap();

        let response = app(store)
            .oneshot(post_form(&item.id, "intent=update&name=Milk"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_intent_removes_item() {
        let (store, item) = seeded().await;
        let response = app(store.clone())
            .oneshot(post_form(&item.id, "intent=delete"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(store.get(&item.id).await.unwrap().is_none());
    }
}
