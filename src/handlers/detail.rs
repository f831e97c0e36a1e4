use super::{esc, page, AppState};
use crate::models::Student;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

/// Detail/edit view for one student. The strict lookup is used here, so an
/// unknown id falls through to the not-found rendering.
pub async fn show(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Html<String> {
    let Some(student) = state.service.get_student(id).await else {
        return page("Student Details", "<p>Student not found.</p>");
    };

    let body = format!(
        "<h2>{} Details</h2>\n\
         <div>id: {}</div>\n\
         <form action=\"/detail/{}\" method=\"post\">\n\
         <label>Name: <input name=\"name\" value=\"{}\"></label><br>\n\
         <label>Classroom: <input name=\"classRoom\" value=\"{}\"></label><br>\n\
         <label>Activity: <input name=\"activities\" value=\"{}\"></label><br>\n\
         <button type=\"submit\">Save</button>\n</form>\n\
         <a href=\"/students\">Go back</a>\n",
        esc(&student.name.to_uppercase()),
        student.id,
        student.id,
        esc(&student.name),
        esc(&student.class_room),
        esc(&student.activities),
    );

    page("Student Details", &body)
}

#[derive(Debug, Deserialize)]
pub struct DetailForm {
    name: String,
    #[serde(rename = "classRoom", default)]
    class_room: String,
    #[serde(default)]
    activities: String,
}

/// Save flow: sends the whole record back, id included.
pub async fn save(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(form): Form<DetailForm>,
) -> Redirect {
    let student = Student {
        id,
        name: form.name,
        class_room: form.class_room,
        activities: form.activities,
    };
    state.service.update_student(&student).await;
    Redirect::to("/students")
}
