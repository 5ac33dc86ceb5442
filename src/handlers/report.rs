//! # Issue Report Handler
//!
//! POST /report: a tenant reports a maintenance issue against their unit.
//! All validation happens here, before anything reaches the repository
//! layer; failures re-render the form inline at HTTP 200.

use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect, Response};
use chrono::Utc;
use serde::Deserialize;

use crate::error::ApiError;
use crate::pages;
use crate::repositories::{IssueRepository, UnitRepository};
use crate::server::AppState;

/// Form payload for reporting an issue
#[derive(Debug, Deserialize)]
pub struct ReportForm {
    #[serde(rename = "issueDesc")]
    pub issue_desc: Option<String>,
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
    #[serde(rename = "userFloor")]
    pub user_floor: Option<String>,
}

/// POST /report
pub async fn submit_report(
    State(state): State<AppState>,
    Form(form): Form<ReportForm>,
) -> Result<Response, ApiError> {
    let desc = form.issue_desc.unwrap_or_default();
    let name = form.user_name.unwrap_or_default();
    let floor_raw = form.user_floor.unwrap_or_default();

    let (desc, name, floor_raw) = (desc.trim(), name.trim(), floor_raw.trim());

    if desc.is_empty() || name.is_empty() || floor_raw.is_empty() {
        return Ok(pages::report_form(Some("Please fill out all fields")).into_response());
    }

    let Ok(floor) = floor_raw.parse::<i32>() else {
        return Ok(pages::report_form(Some("Please put a number as the floor")).into_response());
    };

    let unit = UnitRepository::new(&state.db)
        .find_by_tenant_and_floor(name, floor)
        .await?;

    let Some(unit) = unit else {
        return Ok(pages::report_form(Some(
            "Your unit could not be found, please try again",
        ))
        .into_response());
    };

    let reported_on = Utc::now().date_naive();
    let stored = IssueRepository::new(&state.db)
        .report_issue(unit.unit_id, desc, reported_on)
        .await?;

    tracing::info!(
        number_id = stored.number_id,
        unit_id = unit.unit_id,
        "issue reported"
    );

    Ok(Redirect::to("/submitted").into_response())
}
