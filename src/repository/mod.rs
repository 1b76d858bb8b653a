//! Repository layer.
//!
//! One repository per entity, each holding a clone of the store's pool.
//! Reads eagerly include related rows through an explicit second query:
//!
//! ```text
//! get_by_id(university) → SELECT universities … → SELECT students WHERE university_id = ?
//! get_by_id(student)    → SELECT students …     → SELECT universities WHERE id = ?
//! ```
//!
//! Every call is an independent statement (or one short transaction for
//! delete). There is no caching and no retrying.

pub mod error;
pub mod student;
pub mod university;

pub use error::RepositoryError;
pub use student::StudentRepository;
pub use university::UniversityRepository;
