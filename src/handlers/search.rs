use super::{esc, page, AppState};
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    term: String,
}

/// Search results page. A blank term renders an empty result list without
/// the service ever calling out.
pub async fn results(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let matches = state.service.search_students(&params.term).await;

    let mut body = format!("<h2>Results for \"{}\"</h2>\n<ul>\n", esc(&params.term));
    for student in &matches {
        body.push_str(&format!(
            "<li><a href=\"/detail/{}\">{}</a></li>\n",
            student.id,
            esc(&student.name)
        ));
    }
    body.push_str("</ul>\n");
    if matches.is_empty() {
        body.push_str("<p>No students found.</p>\n");
    }

    page("Search", &body)
}
