mod dashboard;
mod detail;
mod messages;
mod search;
mod students;

use crate::messages::MessageLog;
use crate::service::StudentService;
use axum::{
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Everything a page handler needs: the access service for the collection
/// and the shared message log.
pub struct AppState {
    pub service: StudentService,
    pub messages: MessageLog,
}

/// The app's routing table: one explicit mapping from path to handler.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        .route("/dashboard", get(dashboard::show))
        .route("/students", get(students::index).post(students::add))
        .route("/students/:id/delete", post(students::remove))
        .route("/detail/:id", get(detail::show).post(detail::save))
        .route("/search", get(search::results))
        .route("/messages", get(messages::show))
        .route("/messages/clear", post(messages::clear))
        .with_state(state)
}

/// Shared chrome around every page body.
pub(crate) fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n<body>\n\
         <h1>Student Manager</h1>\n\
         <nav><a href=\"/dashboard\">Dashboard</a> | <a href=\"/students\">Students</a> | \
         <a href=\"/messages\">Messages</a></nav>\n\
         {body}\n</body>\n</html>\n"
    ))
}

/// Escape text for interpolation into a page.
pub(crate) fn esc(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
