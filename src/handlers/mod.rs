//! # HTTP Handlers
//!
//! This module contains all the HTTP endpoint handlers for Rentdesk. The
//! static pages and forms live here; the form-processing handlers live in
//! the submodules.

pub mod demo;
pub mod landlord;
pub mod report;
pub mod resolve;

use axum::extract::State;
use axum::response::{Html, Redirect};

use crate::error::{self, ApiError};
use crate::server::AppState;
use crate::{db, pages};

/// GET /: home page
pub async fn home() -> Html<String> {
    pages::home()
}

/// GET /home: legacy alias for /
pub async fn home_redirect() -> Redirect {
    Redirect::to("/")
}

/// GET /another
pub async fn another() -> Html<String> {
    pages::another()
}

/// GET /submitted: confirmation page, no state
pub async fn submitted() -> Html<String> {
    pages::submitted()
}

/// GET /report
pub async fn report_form() -> Html<String> {
    pages::report_form(None)
}

/// GET /landlord
pub async fn landlord_form() -> Html<String> {
    pages::landlord_form(None)
}

/// GET /resolve
pub async fn resolve_form() -> Html<String> {
    pages::resolve_form(None)
}

/// GET /login: always unauthorized
pub async fn login() -> ApiError {
    error::unauthorized(Some("Login is not available"))
}

/// GET /health: pings the database
pub async fn health(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    db::health_check(&state.db).await?;
    Ok("ok")
}

#[cfg(test)]
mod tests;
