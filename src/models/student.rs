use serde::{Deserialize, Serialize};

/// A student record as the collection endpoint stores it.
///
/// The endpoint owns id assignment; the rest of the app never invents one.
/// Updates are whole-record replacements, so the shape never varies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub class_room: String,
    /// The activity the student usually practices after school
    /// (gymnastics, swim, football...).
    pub activities: String,
}

impl Student {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        class_room: impl Into<String>,
        activities: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            class_room: class_room.into(),
            activities: activities.into(),
        }
    }
}

/// Creation payload: a student without an id. Classroom and activity may be
/// filled in later from the detail page, so both tolerate being absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: String,
    #[serde(default)]
    pub class_room: String,
    #[serde(default)]
    pub activities: String,
}

impl NewStudent {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_room: String::new(),
            activities: String::new(),
        }
    }
}
