//! Table definitions synchronized at startup.
//!
//! Statements are idempotent (`IF NOT EXISTS`) so they run on every boot.

/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row again.
pub const CREATE_UNIVERSITIES: &str = "\
CREATE TABLE IF NOT EXISTS universities (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    name     TEXT NOT NULL,
    location TEXT NOT NULL
)";

pub const CREATE_STUDENTS: &str = "\
CREATE TABLE IF NOT EXISTS students (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    faculty_number TEXT NOT NULL UNIQUE,
    first_name     TEXT NOT NULL,
    middle_name    TEXT,
    last_name      TEXT NOT NULL,
    university_id  INTEGER NOT NULL
        REFERENCES universities(id) ON DELETE RESTRICT
)";

pub const CREATE_STUDENTS_UNIVERSITY_INDEX: &str = "\
CREATE INDEX IF NOT EXISTS idx_students_university_id ON students(university_id)";

/// All schema statements in dependency order.
pub const STATEMENTS: [&str; 3] = [
    CREATE_UNIVERSITIES,
    CREATE_STUDENTS,
    CREATE_STUDENTS_UNIVERSITY_INDEX,
];
