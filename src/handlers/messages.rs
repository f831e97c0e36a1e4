use super::{esc, page, AppState};
use axum::{
    extract::State,
    response::{Html, Redirect},
};
use std::sync::Arc;

/// The developer-facing message log, oldest entry first.
pub async fn show(State(state): State<Arc<AppState>>) -> Html<String> {
    let entries = state.messages.entries();

    let mut body = String::from("<h2>Messages</h2>\n");
    if entries.is_empty() {
        body.push_str("<p>No messages yet.</p>\n");
    } else {
        body.push_str(
            "<form action=\"/messages/clear\" method=\"post\">\
             <button type=\"submit\">Clear messages</button></form>\n",
        );
        for entry in &entries {
            body.push_str(&format!("<div>{}</div>\n", esc(entry)));
        }
    }

    page("Messages", &body)
}

pub async fn clear(State(state): State<Arc<AppState>>) -> Redirect {
    state.messages.clear();
    Redirect::to("/messages")
}
