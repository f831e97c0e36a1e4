use super::{esc, page, AppState};
use axum::{extract::State, response::Html};
use std::sync::Arc;

/// The landing page: the classic slice of four from the roster, plus the
/// search box.
pub async fn show(State(state): State<Arc<AppState>>) -> Html<String> {
    let students = state.service.get_students().await;

    let mut body = String::from("<h2>Top Students</h2>\n<ul>\n");
    for student in students.iter().skip(1).take(4) {
        body.push_str(&format!(
            "<li><a href=\"/detail/{}\">{}</a></li>\n",
            student.id,
            esc(&student.name)
        ));
    }
    body.push_str("</ul>\n");
    body.push_str(
        "<h3>Student Search</h3>\n\
         <form action=\"/search\" method=\"get\">\
         <input name=\"term\" placeholder=\"name\">\
         <button type=\"submit\">Search</button></form>\n",
    );

    page("Dashboard", &body)
}
