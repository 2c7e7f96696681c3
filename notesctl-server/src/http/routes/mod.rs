//! Route handlers organized by resource
//!
//! - index: item list page (list, search, create, delete)
//! - item: item detail page (edit, delete)
//! - api: JSON item API
//! - health: health check endpoint

pub mod api;
pub mod health;
pub mod index;
pub mod item;

use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

/// Fields posted by the item forms.
///
/// Everything is optional so a malformed submission reaches validation
/// instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct ItemForm {
    pub intent: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Query string of the list page
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Every successful mutation returns to the list.
fn back_to_list() -> Response {
    Redirect::to("/").into_response()
}
