//! Entity model.
//!
//! # Relationship
//! ```text
//! University 1 ──── * Student   (students.university_id → universities.id)
//! ```
//!
//! Row types (`University`, `Student`) map one-to-one onto table rows and
//! derive `sqlx::FromRow`. Read shapes (`UniversityWithStudents`,
//! `StudentWithUniversity`) are assembled by the repository layer from a
//! primary query plus an explicit related-rows query.

pub mod student;
pub mod university;

use std::fmt;

pub use student::{NewStudent, Student, StudentWithUniversity};
pub use university::{NewUniversity, University, UniversityUpdate, UniversityWithStudents};

/// Integer primary key shared by both tables.
pub type EntityId = i64;

/// Entity kinds, used to label errors and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    University,
    Student,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::University => write!(f, "University"),
            Entity::Student => write!(f, "Student"),
        }
    }
}
