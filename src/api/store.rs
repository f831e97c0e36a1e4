use crate::models::{NewStudent, Student};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// The roster the mock endpoint starts with, in the style of the classic
/// tutorial data set (ids start at 11).
static SEED_STUDENTS: Lazy<Vec<Student>> = Lazy::new(|| {
    vec![
        Student::new(11, "Anna Puig", "3-A", "gymnastics"),
        Student::new(12, "Ben Soler", "3-A", "football"),
        Student::new(13, "Carla Mas", "3-B", "swim"),
        Student::new(14, "David Font", "3-B", "chess"),
        Student::new(15, "Emma Riera", "4-A", "basketball"),
        Student::new(16, "Felip Costa", "4-A", "theater"),
        Student::new(17, "Gina Vidal", "4-B", "painting"),
        Student::new(18, "Hugo Serra", "4-B", "judo"),
        Student::new(19, "Iris Bosch", "5-A", "violin"),
        Student::new(20, "Joan Pons", "5-A", "dance"),
    ]
});

/// In-memory backing collection for the mock endpoint.
///
/// This is the canonical copy of the data: anything the rest of the app
/// holds is a snapshot. The store also counts the requests it has served.
pub struct StudentStore {
    students: Mutex<Vec<Student>>,
    requests: AtomicUsize,
}

impl StudentStore {
    pub fn new(students: Vec<Student>) -> Self {
        Self {
            students: Mutex::new(students),
            requests: AtomicUsize::new(0),
        }
    }

    /// A store pre-loaded with the tutorial roster.
    pub fn seeded() -> Self {
        Self::new(SEED_STUDENTS.clone())
    }

    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// How many endpoint requests this store has answered.
    pub fn requests_served(&self) -> usize {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn list(&self) -> Vec<Student> {
        self.students.lock().unwrap().clone()
    }

    /// Filtered read: exact match on id, case-insensitive substring match
    /// on name. Filters compose conjunctively.
    pub fn query(&self, id: Option<i64>, name: Option<&str>) -> Vec<Student> {
        let name = name.map(str::to_lowercase);
        self.students
            .lock()
            .unwrap()
            .iter()
            .filter(|s| id.map_or(true, |id| s.id == id))
            .filter(|s| {
                name.as_deref()
                    .map_or(true, |term| s.name.to_lowercase().contains(term))
            })
            .cloned()
            .collect()
    }

    pub fn find(&self, id: i64) -> Option<Student> {
        self.students
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    /// Insert a new student, assigning the next free id: one past the
    /// highest id in the collection, or 11 when the collection is empty.
    pub fn create(&self, new: NewStudent) -> Student {
        let mut students = self.students.lock().unwrap();
        let id = students.iter().map(|s| s.id).max().map_or(11, |max| max + 1);
        let student = Student {
            id,
            name: new.name,
            class_room: new.class_room,
            activities: new.activities,
        };
        students.push(student.clone());
        student
    }

    /// Replace the student carrying the same id as `student`, returning the
    /// new record, or `None` when no such id exists.
    pub fn replace(&self, student: Student) -> Option<Student> {
        let mut students = self.students.lock().unwrap();
        let slot = students.iter_mut().find(|s| s.id == student.id)?;
        *slot = student.clone();
        Some(student)
    }

    /// Remove by id, returning the removed record.
    pub fn remove(&self, id: i64) -> Option<Student> {
        let mut students = self.students.lock().unwrap();
        let index = students.iter().position(|s| s.id == id)?;
        Some(students.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_store() -> StudentStore {
        StudentStore::new(vec![
            Student::new(11, "Anna", "3-A", "swim"),
            Student::new(12, "Ben", "3-B", "chess"),
        ])
    }

    #[test]
    fn create_assigns_one_past_the_highest_id() {
        let store = small_store();
        let created = store.create(NewStudent::named("Carla"));
        assert_eq!(created.id, 13);
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn create_on_an_empty_store_starts_at_eleven() {
        let store = StudentStore::new(Vec::new());
        assert_eq!(store.create(NewStudent::named("Anna")).id, 11);
    }

    #[test]
    fn query_by_name_is_a_case_insensitive_substring_match() {
        let store = small_store();
        let found = store.query(None, Some("AN"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Anna");
        assert!(store.query(None, Some("zzz")).is_empty());
    }

    #[test]
    fn query_by_id_is_exact() {
        let store = small_store();
        assert_eq!(store.query(Some(12), None).len(), 1);
        assert!(store.query(Some(99), None).is_empty());
    }

    #[test]
    fn replace_of_an_unknown_id_is_none() {
        let store = small_store();
        assert!(store.replace(Student::new(99, "Nobody", "", "")).is_none());

        let updated = store.replace(Student::new(11, "Anna", "5-C", "swim"));
        assert_eq!(updated.unwrap().class_room, "5-C");
        assert_eq!(store.find(11).unwrap().class_room, "5-C");
    }

    #[test]
    fn remove_returns_the_removed_record() {
        let store = small_store();
        assert_eq!(store.remove(11).unwrap().name, "Anna");
        assert!(store.remove(11).is_none());
        assert!(store.list().iter().all(|s| s.id != 11));
    }
}
