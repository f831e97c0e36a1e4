use super::{esc, page, AppState};
use crate::models::NewStudent;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

/// The full roster, with an add form at the top and a delete button per row.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let students = state.service.get_students().await;

    let mut body = String::from("<h2>My Students</h2>\n");
    body.push_str(
        "<form action=\"/students\" method=\"post\">\
         <label>Student name: <input name=\"name\"></label>\
         <button type=\"submit\">Add</button></form>\n<ul>\n",
    );
    for student in &students {
        body.push_str(&format!(
            "<li><a href=\"/detail/{id}\"><span>{id}</span> {name}</a>\
             <form action=\"/students/{id}/delete\" method=\"post\">\
             <button type=\"submit\">x</button></form></li>\n",
            id = student.id,
            name = esc(&student.name),
        ));
    }
    body.push_str("</ul>\n");

    page("Students", &body)
}

#[derive(Debug, Deserialize)]
pub struct AddForm {
    name: String,
}

/// Add flow: a blank name never reaches the service.
pub async fn add(State(state): State<Arc<AppState>>, Form(form): Form<AddForm>) -> Redirect {
    let name = form.name.trim();
    if !name.is_empty() {
        state.service.add_student(NewStudent::named(name)).await;
    }
    Redirect::to("/students")
}

pub async fn remove(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Redirect {
    state.service.delete_student(id).await;
    Redirect::to("/students")
}
