use super::store::StudentStore;
use crate::models::{NewStudent, Student};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Optional filters on a collection read. With neither present the whole
/// collection comes back.
#[derive(Debug, Deserialize)]
pub struct CollectionFilter {
    id: Option<i64>,
    name: Option<String>,
}

/// The mock collection endpoint: a JSON-over-HTTP stand-in for the real
/// backend the tutorial never has. Routes mirror a REST collection resource
/// at `/api/students`.
pub fn router(store: Arc<StudentStore>) -> Router {
    Router::new()
        .route(
            "/api/students",
            get(list_students).post(create_student).put(replace_student),
        )
        .route(
            "/api/students/:id",
            get(find_student).delete(remove_student),
        )
        .with_state(store)
}

async fn list_students(
    State(store): State<Arc<StudentStore>>,
    Query(filter): Query<CollectionFilter>,
) -> Json<Vec<Student>> {
    store.record_request();
    Json(store.query(filter.id, filter.name.as_deref()))
}

async fn find_student(
    State(store): State<Arc<StudentStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, (StatusCode, Json<Value>)> {
    store.record_request();
    store.find(id).map(Json).ok_or_else(|| not_found(id))
}

async fn create_student(
    State(store): State<Arc<StudentStore>>,
    Json(new): Json<NewStudent>,
) -> (StatusCode, Json<Student>) {
    store.record_request();
    let created = store.create(new);
    tracing::debug!("created student id={}", created.id);
    (StatusCode::CREATED, Json(created))
}

async fn replace_student(
    State(store): State<Arc<StudentStore>>,
    Json(student): Json<Student>,
) -> Result<Json<Student>, (StatusCode, Json<Value>)> {
    store.record_request();
    let id = student.id;
    store.replace(student).map(Json).ok_or_else(|| not_found(id))
}

async fn remove_student(
    State(store): State<Arc<StudentStore>>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, (StatusCode, Json<Value>)> {
    store.record_request();
    store.remove(id).map(Json).ok_or_else(|| not_found(id))
}

fn not_found(id: i64) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("student {id} not found") })),
    )
}
