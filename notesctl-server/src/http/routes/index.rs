//! Item list page
//!
//! GET renders the (optionally filtered) list with the search box and the
//! create form. POST either deletes (`intent=delete`, `id`) or creates
//! (`name`, `description`), then redirects back to the list.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};

use super::{back_to_list, ItemForm, SearchParams};
use crate::http::error::PageError;
use crate::http::render::{self, ListView};
use crate::http::server::AppState;
use crate::models::{Intent, ItemDraft, ItemId, SearchTerm};

/// GET / - list items, filtered by `q` when present
async fn list_items(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, PageError> {
    let search = params.q.unwrap_or_default();
    let items = state.store.list(SearchTerm::parse(Some(&search)).as_ref()).await?;

    Ok(Html(render::list_page(&ListView {
        items: &items,
        search: &search,
        error: None,
        name: "",
        description: "",
    })))
}

/// POST / - create or delete an item
async fn submit(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
    Form(form): Form<ItemForm>,
) -> Result<Response, PageError> {
    if Intent::from_field(form.intent.as_deref()) == Intent::Delete {
        // Unknown or malformed ids have nothing to delete
        if let Some(id) = form.id.as_deref().and_then(|raw| ItemId::parse(raw).ok()) {
            state.store.delete(&id).await?;
        }
        return Ok(back_to_list());
    }

    let draft = match ItemDraft::new(form.name.as_deref(), form.description.as_deref()) {
        Ok(draft) => draft,
        Err(err) => {
            tracing::debug!("Rejected item submission: {}", err);
            let search = params.q.unwrap_or_default();
            let items = state.store.list(SearchTerm::parse(Some(&search)).as_ref()).await?;
            let page = render::list_page(&ListView {
                items: &items,
                search: &search,
                error: Some(&err.to_string()),
                name: form.name.as_deref().unwrap_or_default(),
                description: form.description.as_deref().unwrap_or_default(),
            });
            return Ok((StatusCode::BAD_REQUEST, Html(page)).into_response());
        }
    };

    let item = state.store.create(draft).await?;
    tracing::info!(id = %item.id, "Item created");

    Ok(back_to_list())
}

/// List page routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_items).post(submit))
}
