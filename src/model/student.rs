//! Student records.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{EntityId, University};

/// A row from the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: EntityId,
    pub faculty_number: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub university_id: EntityId,
}

/// Fields required to insert a student.
///
/// `university_id` must already have been resolved against the
/// `universities` table by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub faculty_number: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub university_id: EntityId,
}

/// A student together with the university it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentWithUniversity {
    #[serde(flatten)]
    pub student: Student,
    pub university: University,
}

impl StudentWithUniversity {
    pub fn new(student: Student, university: University) -> Self {
        Self {
            student,
            university,
        }
    }
}
