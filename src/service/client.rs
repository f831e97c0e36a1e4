use crate::messages::MessageLog;
use crate::models::{NewStudent, Student};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// What can go wrong talking to the collection endpoint. Transport errors,
/// non-2xx answers and undecodable bodies all collapse into this one type;
/// its `Display` never fails, so a failure message can always be extracted.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Mediates every read and write of the student collection.
///
/// No operation here can fail from the caller's point of view: each one
/// catches the endpoint failure at the boundary, traces it, appends one line
/// to the message log and resolves with a substitute value instead. Pages
/// stay up when the backend hiccups; the log is where the truth lives.
///
/// There are no retries and no timeouts. A failed call is terminal for that
/// call; the caller may simply invoke the operation again.
#[derive(Clone)]
pub struct StudentService {
    client: Client,
    students_url: String,
    messages: MessageLog,
}

impl StudentService {
    /// `students_url` is the collection path itself,
    /// e.g. `http://127.0.0.1:3000/api/students`.
    pub fn new(students_url: String, messages: MessageLog) -> Self {
        Self {
            client: Client::new(),
            students_url,
            messages,
        }
    }

    /// Fetch every student in the collection.
    pub async fn get_students(&self) -> Vec<Student> {
        match self.fetch_collection(&[]).await {
            Ok(students) => {
                self.log("fetched students");
                students
            }
            Err(e) => self.recover("get_students", &e, Vec::new()),
        }
    }

    /// Fetch one student by id. An unknown id is a 404 from the endpoint,
    /// which lands in the recovery path like any other failure.
    pub async fn get_student(&self, id: i64) -> Option<Student> {
        let url = format!("{}/{}", self.students_url, id);
        let result = async {
            let response = self.client.get(&url).send().await?;
            decode::<Student>(response).await
        }
        .await;

        match result {
            Ok(student) => {
                self.log(format!("fetched student id={id}"));
                Some(student)
            }
            Err(e) => self.recover(&format!("get_student id={id}"), &e, None),
        }
    }

    /// Fetch one student by id without treating an unknown id as an error:
    /// filters the collection and takes the first match, so absence is a
    /// normal outcome rather than a 404.
    pub async fn get_student_no404(&self, id: i64) -> Option<Student> {
        match self.fetch_collection(&[("id", id.to_string())]).await {
            Ok(students) => {
                let student = students.into_iter().next();
                let outcome = if student.is_some() {
                    "fetched"
                } else {
                    "did not find"
                };
                self.log(format!("{outcome} student id={id}"));
                student
            }
            Err(e) => self.recover(&format!("get_student_no404 id={id}"), &e, None),
        }
    }

    /// Add a new student; the endpoint assigns the id and echoes the
    /// created record back.
    pub async fn add_student(&self, student: NewStudent) -> Option<Student> {
        let result = async {
            let response = self
                .client
                .post(&self.students_url)
                .json(&student)
                .send()
                .await?;
            decode::<Student>(response).await
        }
        .await;

        match result {
            Ok(created) => {
                self.log(format!("added student w/ id={}", created.id));
                Some(created)
            }
            Err(e) => self.recover("add_student", &e, None),
        }
    }

    /// Replace a student on the endpoint with the full record given.
    pub async fn update_student(&self, student: &Student) -> Option<Student> {
        let result = async {
            let response = self
                .client
                .put(&self.students_url)
                .json(student)
                .send()
                .await?;
            decode::<Student>(response).await
        }
        .await;

        match result {
            Ok(updated) => {
                self.log(format!("updated student id={}", student.id));
                Some(updated)
            }
            Err(e) => self.recover(&format!("update_student id={}", student.id), &e, None),
        }
    }

    /// Delete a student by id; the endpoint echoes the removed record.
    pub async fn delete_student(&self, id: i64) -> Option<Student> {
        let url = format!("{}/{}", self.students_url, id);
        let result = async {
            let response = self.client.delete(&url).send().await?;
            decode::<Student>(response).await
        }
        .await;

        match result {
            Ok(removed) => {
                self.log(format!("deleted student id={id}"));
                Some(removed)
            }
            Err(e) => self.recover(&format!("delete_student id={id}"), &e, None),
        }
    }

    /// Fetch the students whose name contains `term`. A blank term never
    /// reaches the endpoint: it short-circuits to an empty list with no
    /// log line at all.
    pub async fn search_students(&self, term: &str) -> Vec<Student> {
        if term.trim().is_empty() {
            return Vec::new();
        }

        match self.fetch_collection(&[("name", term.to_string())]).await {
            Ok(students) => {
                if students.is_empty() {
                    self.log(format!("no students matching \"{term}\""));
                } else {
                    self.log(format!("found students matching \"{term}\""));
                }
                students
            }
            Err(e) => self.recover(&format!("search_students \"{term}\""), &e, Vec::new()),
        }
    }

    /// GET the collection URL with the given query filters.
    async fn fetch_collection(
        &self,
        query: &[(&str, String)],
    ) -> Result<Vec<Student>, EndpointError> {
        let response = self
            .client
            .get(&self.students_url)
            .query(query)
            .send()
            .await?;
        decode(response).await
    }

    /// The one recovery path every operation funnels through: trace the
    /// failure for developers, log it for the messages page, and let the
    /// caller continue with a substitute value.
    fn recover<T>(&self, operation: &str, error: &EndpointError, substitute: T) -> T {
        tracing::error!("{operation}: {error}");
        self.log(format!("{operation} failed: {error}"));
        substitute
    }

    fn log(&self, message: impl AsRef<str>) {
        self.messages
            .add(format!("StudentService: {}", message.as_ref()));
    }
}

/// Turn a response into a decoded body, mapping non-2xx statuses to
/// `EndpointError::Status` before touching the body at all.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, EndpointError> {
    let status = response.status();
    if !status.is_success() {
        return Err(EndpointError::Status(status));
    }
    Ok(response.json().await?)
}
