//! # Landlord Summary Handler
//!
//! POST /landlord: look up a landlord by name and render how many issues
//! their units have accumulated and how many they have resolved.

use axum::extract::{Form, State};
use axum::response::Html;
use serde::Deserialize;

use crate::error::ApiError;
use crate::pages;
use crate::repositories::LandlordRepository;
use crate::server::AppState;

/// Form payload for the landlord summary
#[derive(Debug, Deserialize)]
pub struct SummaryForm {
    #[serde(rename = "llName")]
    pub ll_name: Option<String>,
}

/// POST /landlord
pub async fn summary(
    State(state): State<AppState>,
    Form(form): Form<SummaryForm>,
) -> Result<Html<String>, ApiError> {
    let name = form.ll_name.unwrap_or_default();
    let name = name.trim();

    if name.is_empty() {
        return Ok(pages::landlord_form(Some("Please enter a name")));
    }

    let repo = LandlordRepository::new(&state.db);

    let Some(landlord) = repo.find_by_name(name).await? else {
        return Ok(pages::landlord_form(Some(
            "Your entry could not be found, please try again",
        )));
    };

    let issue_count = repo.issue_count(landlord.landlord_id).await?;
    let resolved_count = repo.resolved_count(landlord.landlord_id).await?;

    Ok(pages::landlord_summary(
        &landlord.name,
        issue_count,
        resolved_count,
    ))
}
