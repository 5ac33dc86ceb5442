//! # Page Rendering
//!
//! Minimal HTML rendering for the handful of pages the handlers serve.
//! Validation and not-found failures are rendered inline on the originating
//! form at HTTP 200. All interpolated user input is escaped.

use crate::models::issue;
use axum::response::Html;

/// Escape text for interpolation into HTML
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body>\n\
         <nav><a href=\"/\">Home</a> | <a href=\"/report\">Report an issue</a> | \
         <a href=\"/landlord\">Landlord summary</a> | <a href=\"/resolve\">Resolve</a></nav>\n\
         {}\n</body>\n</html>\n",
        escape(title),
        body
    ))
}

fn failure_banner(fail: Option<&str>) -> String {
    match fail {
        Some(message) => format!("<p class=\"error\">{}</p>\n", escape(message)),
        None => String::new(),
    }
}

pub fn home() -> Html<String> {
    layout(
        "Rentdesk",
        "<h1>Rentdesk</h1>\n<p>Report maintenance issues, review your portfolio, and resolve open reports.</p>",
    )
}

pub fn another() -> Html<String> {
    layout(
        "Another page",
        "<h1>Another page</h1>\n<p>Nothing to see here.</p>",
    )
}

pub fn submitted() -> Html<String> {
    layout(
        "Submitted",
        "<h1>Thank you</h1>\n<p>Your submission has been recorded.</p>",
    )
}

pub fn names_index(names: &[String], fail: Option<&str>) -> Html<String> {
    let mut body = format!("<h1>Names</h1>\n{}<ul>\n", failure_banner(fail));
    for name in names {
        body.push_str(&format!("<li>{}</li>\n", escape(name)));
    }
    body.push_str("</ul>\n");
    body.push_str(
        "<form method=\"post\" action=\"/add\">\
         <input name=\"name\" placeholder=\"name\">\
         <button type=\"submit\">Add</button></form>",
    );
    layout("Names", &body)
}

pub fn report_form(fail: Option<&str>) -> Html<String> {
    let body = format!(
        "<h1>Report an issue</h1>\n{}\
         <form method=\"post\" action=\"/report\">\n\
         <label>Description <input name=\"issueDesc\"></label>\n\
         <label>Your name <input name=\"userName\"></label>\n\
         <label>Floor <input name=\"userFloor\"></label>\n\
         <button type=\"submit\">Report</button>\n</form>",
        failure_banner(fail)
    );
    layout("Report an issue", &body)
}

pub fn landlord_form(fail: Option<&str>) -> Html<String> {
    let body = format!(
        "<h1>Landlord summary</h1>\n{}\
         <form method=\"post\" action=\"/landlord\">\n\
         <label>Landlord name <input name=\"llName\"></label>\n\
         <button type=\"submit\">Look up</button>\n</form>",
        failure_banner(fail)
    );
    layout("Landlord summary", &body)
}

pub fn landlord_summary(name: &str, issue_count: u64, resolved_count: u64) -> Html<String> {
    let body = format!(
        "<h1>Landlord summary</h1>\n\
         <p>{} has had {} issue(s) across their owned properties.</p>\n\
         <p>They have resolved {} of them.</p>",
        escape(name),
        issue_count,
        resolved_count
    );
    layout("Landlord summary", &body)
}

pub fn resolve_form(fail: Option<&str>) -> Html<String> {
    let body = format!(
        "<h1>Resolve an issue</h1>\n{}\
         <form method=\"post\" action=\"/resolve\">\n\
         <label>Landlord name <input name=\"llName\"></label>\n\
         <button type=\"submit\">List open issues</button>\n</form>",
        failure_banner(fail)
    );
    layout("Resolve an issue", &body)
}

/// Phase-2 form: the landlord id travels in a hidden field so each
/// submission is self-contained under concurrent use.
pub fn resolve_issue_list(
    landlord_id: i32,
    landlord_name: &str,
    issues: &[issue::Model],
    fail: Option<&str>,
) -> Html<String> {
    let mut body = format!(
        "<h1>Open issues for {}</h1>\n{}",
        escape(landlord_name),
        failure_banner(fail)
    );

    if issues.is_empty() {
        body.push_str("<p>No open issues.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for issue in issues {
            body.push_str(&format!(
                "<li>#{} &mdash; {}</li>\n",
                issue.number_id,
                escape(&issue.description)
            ));
        }
        body.push_str("</ul>\n");
    }

    body.push_str(&format!(
        "<form method=\"post\" action=\"/resolve\">\n\
         <input type=\"hidden\" name=\"landlordId\" value=\"{}\">\n\
         <label>Issue number <input name=\"resolve\"></label>\n\
         <button type=\"submit\">Mark resolved</button>\n</form>",
        landlord_id
    ));

    layout("Resolve an issue", &body)
}
