use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use studenthub::api::{self, StudentStore};
use studenthub::messages::MessageLog;
use studenthub::models::{NewStudent, Student};
use studenthub::service::StudentService;
use tokio::net::TcpListener;

struct TestApp {
    service: StudentService,
    store: Arc<StudentStore>,
    messages: MessageLog,
}

/// Spin up the mock collection endpoint on an ephemeral port and point a
/// fresh service at it.
async fn start_app(students: Vec<Student>) -> anyhow::Result<TestApp> {
    let store = Arc::new(StudentStore::new(students));
    let app = api::router(Arc::clone(&store));

    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    let messages = MessageLog::new();
    let service = StudentService::new(format!("http://{}/api/students", addr), messages.clone());
    Ok(TestApp {
        service,
        store,
        messages,
    })
}

fn roster() -> Vec<Student> {
    vec![
        Student::new(11, "Anna", "3-A", "gymnastics"),
        Student::new(12, "Ben", "3-B", "football"),
        Student::new(13, "Carla", "4-A", "swim"),
    ]
}

fn has_entry(messages: &MessageLog, needle: &str) -> bool {
    messages.entries().iter().any(|m| m.contains(needle))
}

#[tokio::test]
async fn lists_the_whole_collection() -> anyhow::Result<()> {
    let app = start_app(roster()).await?;

    let students = app.service.get_students().await;
    assert_eq!(students.len(), 3);
    assert!(has_entry(&app.messages, "StudentService: fetched students"));
    Ok(())
}

#[tokio::test]
async fn strict_get_finds_a_known_id() -> anyhow::Result<()> {
    let app = start_app(roster()).await?;

    let student = app.service.get_student(12).await.expect("student 12");
    assert_eq!(student.name, "Ben");
    assert!(has_entry(&app.messages, "fetched student id=12"));
    Ok(())
}

#[tokio::test]
async fn strict_get_of_an_unknown_id_recovers_to_none() -> anyhow::Result<()> {
    let app = start_app(roster()).await?;

    assert!(app.service.get_student(999).await.is_none());
    assert!(has_entry(&app.messages, "get_student id=999 failed"));
    Ok(())
}

#[tokio::test]
async fn lenient_get_treats_absence_as_a_normal_outcome() -> anyhow::Result<()> {
    let app = start_app(roster()).await?;

    assert!(app.service.get_student_no404(999).await.is_none());
    assert!(has_entry(&app.messages, "did not find student id=999"));
    assert!(!has_entry(&app.messages, "failed"));

    let found = app.service.get_student_no404(11).await.expect("student 11");
    assert_eq!(found.name, "Anna");
    assert!(has_entry(&app.messages, "fetched student id=11"));
    Ok(())
}

#[tokio::test]
async fn create_round_trips_through_the_assigned_id() -> anyhow::Result<()> {
    let app = start_app(roster()).await?;

    let created = app
        .service
        .add_student(NewStudent::named("Dara"))
        .await
        .expect("created");
    assert_eq!(created.id, 14);
    assert!(has_entry(&app.messages, "added student w/ id=14"));

    let fetched = app.service.get_student(created.id).await.expect("fetched");
    assert_eq!(fetched, created);
    Ok(())
}

#[tokio::test]
async fn create_on_an_empty_collection_starts_at_eleven() -> anyhow::Result<()> {
    let app = start_app(Vec::new()).await?;

    let created = app
        .service
        .add_student(NewStudent::named("Anna"))
        .await
        .expect("created");
    assert_eq!(created.id, 11);
    Ok(())
}

#[tokio::test]
async fn update_replaces_the_whole_record() -> anyhow::Result<()> {
    let app = start_app(roster()).await?;

    let mut student = app.service.get_student(11).await.expect("student 11");
    student.class_room = "5-C".to_string();

    let updated = app.service.update_student(&student).await.expect("updated");
    assert_eq!(updated.class_room, "5-C");
    assert!(has_entry(&app.messages, "updated student id=11"));

    let fetched = app.service.get_student(11).await.expect("fetched");
    assert_eq!(fetched.class_room, "5-C");
    Ok(())
}

#[tokio::test]
async fn delete_excludes_the_id_from_later_lists() -> anyhow::Result<()> {
    let app = start_app(roster()).await?;

    let removed = app.service.delete_student(12).await.expect("removed");
    assert_eq!(removed.name, "Ben");
    assert!(has_entry(&app.messages, "deleted student id=12"));

    let students = app.service.get_students().await;
    assert!(students.iter().all(|s| s.id != 12));
    Ok(())
}

#[tokio::test]
async fn search_matches_name_substrings() -> anyhow::Result<()> {
    let app = start_app(vec![
        Student::new(1, "Anna", "", ""),
        Student::new(2, "Ben", "", ""),
    ])
    .await?;

    let found = app.service.search_students("an").await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Anna");
    assert!(has_entry(
        &app.messages,
        "found students matching \"an\""
    ));
    Ok(())
}

#[tokio::test]
async fn search_with_no_matches_logs_the_miss() -> anyhow::Result<()> {
    let app = start_app(roster()).await?;

    let found = app.service.search_students("zzz").await;
    assert!(found.is_empty());
    assert!(has_entry(&app.messages, "no students matching \"zzz\""));
    Ok(())
}

#[tokio::test]
async fn blank_search_never_calls_the_endpoint() -> anyhow::Result<()> {
    let app = start_app(roster()).await?;

    let served_before = app.store.requests_served();
    assert!(app.service.search_students("   ").await.is_empty());
    assert!(app.service.search_students("").await.is_empty());

    assert_eq!(app.store.requests_served(), served_before);
    assert!(!has_entry(&app.messages, "students matching"));
    assert!(app.messages.is_empty());
    Ok(())
}
