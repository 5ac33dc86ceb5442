//! # Demo Names Handlers
//!
//! The seeded names list (/index) and insertion (/add) endpoints.

use axum::extract::{Form, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::error::ApiError;
use crate::pages;
use crate::repositories::DemoRepository;
use crate::server::AppState;

/// Form payload for adding a name
#[derive(Debug, Deserialize)]
pub struct AddNameForm {
    pub name: Option<String>,
}

/// GET /index: list all names
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let names = DemoRepository::new(&state.db).list_names().await?;
    Ok(pages::names_index(&names, None))
}

/// POST /add: insert one name, then back to the home page
pub async fn add_name(
    State(state): State<AppState>,
    Form(form): Form<AddNameForm>,
) -> Result<Response, ApiError> {
    let name = form.name.unwrap_or_default();
    if name.trim().is_empty() {
        let repo = DemoRepository::new(&state.db);
        let names = repo.list_names().await?;
        return Ok(pages::names_index(&names, Some("Please enter a name")).into_response());
    }

    DemoRepository::new(&state.db).insert_name(&name).await?;

    Ok(Redirect::to("/").into_response())
}
