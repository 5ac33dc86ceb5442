//! # Resolve Flow Handlers
//!
//! POST /resolve runs in two self-contained phases. Phase 1 carries the
//! landlord name and answers with their open issues plus a hidden
//! `landlordId` field; phase 2 carries that id and the chosen issue number.
//! Nothing is remembered between requests, so concurrent users cannot
//! interfere with each other.

use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::error::ApiError;
use crate::pages;
use crate::repositories::{LandlordRepository, RepositoryError};
use crate::server::AppState;

/// Form payload for both resolve phases
#[derive(Debug, Deserialize)]
pub struct ResolveForm {
    /// Phase 1: landlord name to list open issues for
    #[serde(rename = "llName")]
    pub ll_name: Option<String>,
    /// Phase 2: landlord id carried over from the phase-1 response
    #[serde(rename = "landlordId")]
    pub landlord_id: Option<String>,
    /// Phase 2: issue number chosen for resolution
    pub resolve: Option<String>,
}

/// POST /resolve
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ResolveForm>,
) -> Result<Response, ApiError> {
    let repo = LandlordRepository::new(&state.db);

    if let Some(name) = form.ll_name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        return list_open_issues(&repo, name).await;
    }

    if form.landlord_id.is_some() {
        return record_resolution(&repo, form).await;
    }

    Ok(pages::resolve_form(Some("Please enter a name")).into_response())
}

/// Phase 1: list the landlord's unresolved issues
async fn list_open_issues(
    repo: &LandlordRepository<'_>,
    name: &str,
) -> Result<Response, ApiError> {
    let Some(landlord) = repo.find_by_name(name).await? else {
        return Ok(pages::resolve_form(Some(
            "Your entry could not be found, please try again",
        ))
        .into_response());
    };

    let issues = repo.unresolved_issues(landlord.landlord_id).await?;

    Ok(pages::resolve_issue_list(landlord.landlord_id, &landlord.name, &issues, None)
        .into_response())
}

/// Phase 2: insert the resolves row for (landlord, issue)
async fn record_resolution(
    repo: &LandlordRepository<'_>,
    form: ResolveForm,
) -> Result<Response, ApiError> {
    let landlord_id_raw = form.landlord_id.unwrap_or_default();
    let Ok(landlord_id) = landlord_id_raw.trim().parse::<i32>() else {
        return Ok(pages::resolve_form(Some("Please enter a name")).into_response());
    };

    let Some(landlord) = repo.find_by_id(landlord_id).await? else {
        return Ok(pages::resolve_form(Some(
            "Your entry could not be found, please try again",
        ))
        .into_response());
    };

    let issues = repo.unresolved_issues(landlord.landlord_id).await?;

    let number_raw = form.resolve.unwrap_or_default();
    let Ok(number_id) = number_raw.trim().parse::<i32>() else {
        return Ok(pages::resolve_issue_list(
            landlord.landlord_id,
            &landlord.name,
            &issues,
            Some("Please enter a number"),
        )
        .into_response());
    };

    match repo.record_resolution(landlord.landlord_id, number_id).await {
        Ok(_) => {
            tracing::info!(
                landlord_id = landlord.landlord_id,
                number_id,
                "issue resolved"
            );
            Ok(Redirect::to("/submitted").into_response())
        }
        Err(RepositoryError::NotFound(_)) => Ok(pages::resolve_issue_list(
            landlord.landlord_id,
            &landlord.name,
            &issues,
            Some("That issue could not be found, please try again"),
        )
        .into_response()),
        Err(RepositoryError::Conflict(_)) => Ok(pages::resolve_issue_list(
            landlord.landlord_id,
            &landlord.name,
            &issues,
            Some("That issue has already been resolved"),
        )
        .into_response()),
        Err(err) => Err(err.into()),
    }
}
