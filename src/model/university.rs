//! University records.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{EntityId, Student};

/// A row from the `universities` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct University {
    pub id: EntityId,
    pub name: String,
    pub location: String,
}

/// Fields required to insert a university. Both are already checked non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUniversity {
    pub name: String,
    pub location: String,
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniversityUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
}

impl UniversityUpdate {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none()
    }
}

/// A university together with the students that reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityWithStudents {
    #[serde(flatten)]
    pub university: University,
    pub students: Vec<Student>,
}

impl UniversityWithStudents {
    pub fn new(university: University, students: Vec<Student>) -> Self {
        Self {
            university,
            students,
        }
    }
}
