//! Student persistence.

use std::collections::HashMap;

use sqlx::SqlitePool;

use super::error::{RepositoryError, Result};
use crate::model::{Entity, EntityId, NewStudent, Student, StudentWithUniversity, University};

const SELECT_STUDENT: &str = "\
SELECT id, faculty_number, first_name, middle_name, last_name, university_id FROM students";

/// Create and read access to the `students` table.
///
/// Students are never updated or deleted through the service.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: SqlitePool,
}

impl StudentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a student and return it with its university.
    ///
    /// The caller resolves `university_id` first; the foreign key still
    /// rejects the insert if the university disappeared in between.
    pub async fn create(&self, new: NewStudent) -> Result<StudentWithUniversity> {
        let student = sqlx::query_as::<_, Student>(
            "INSERT INTO students \
             (faculty_number, first_name, middle_name, last_name, university_id) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             RETURNING id, faculty_number, first_name, middle_name, last_name, university_id",
        )
        .bind(&new.faculty_number)
        .bind(&new.first_name)
        .bind(&new.middle_name)
        .bind(&new.last_name)
        .bind(new.university_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(
            student_id = student.id,
            university_id = student.university_id,
            "Student created"
        );
        self.with_university(student).await
    }

    /// Every student with its university.
    pub async fn get_all(&self) -> Result<Vec<StudentWithUniversity>> {
        let students = sqlx::query_as::<_, Student>(&format!("{SELECT_STUDENT} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        let universities: HashMap<EntityId, University> =
            sqlx::query_as::<_, University>("SELECT id, name, location FROM universities")
                .fetch_all(&self.pool)
                .await?
                .into_iter()
                .map(|u| (u.id, u))
                .collect();

        Ok(students
            .into_iter()
            .filter_map(|student| match universities.get(&student.university_id) {
                Some(university) => Some(StudentWithUniversity::new(student, university.clone())),
                None => {
                    tracing::warn!(
                        student_id = student.id,
                        university_id = student.university_id,
                        "Student references a missing university"
                    );
                    None
                }
            })
            .collect())
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<StudentWithUniversity> {
        let student = sqlx::query_as::<_, Student>(&format!("{SELECT_STUDENT} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound(Entity::Student))?;
        self.with_university(student).await
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn with_university(&self, student: Student) -> Result<StudentWithUniversity> {
        let university = sqlx::query_as::<_, University>(
            "SELECT id, name, location FROM universities WHERE id = ?1",
        )
        .bind(student.university_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound(Entity::University))?;
        Ok(StudentWithUniversity::new(student, university))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::model::NewUniversity;
    use crate::store::Store;

    async fn store_with_university() -> (Store, EntityId) {
        let store = Store::open(&DatabaseConfig::in_memory()).await.unwrap();
        let id = store
            .universities()
            .create(NewUniversity {
                name: "Tech University".into(),
                location: "Boston".into(),
            })
            .await
            .unwrap()
            .university
            .id;
        (store, id)
    }

    fn john(university_id: EntityId) -> NewStudent {
        NewStudent {
            faculty_number: "FN001".into(),
            first_name: "John".into(),
            middle_name: Some("Michael".into()),
            last_name: "Doe".into(),
            university_id,
        }
    }

    #[tokio::test]
    async fn test_create_includes_university() {
        let (store, university_id) = store_with_university().await;
        let created = store.students().create(john(university_id)).await.unwrap();

        assert_eq!(created.student.faculty_number, "FN001");
        assert_eq!(created.student.middle_name.as_deref(), Some("Michael"));
        assert_eq!(created.university.id, university_id);

        let fetched = store.students().get_by_id(created.student.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_duplicate_faculty_number_rejected() {
        let (store, university_id) = store_with_university().await;
        let repo = store.students();
        repo.create(john(university_id)).await.unwrap();

        let mut again = john(university_id);
        again.first_name = "Jane".into();
        let err = repo.create(again).await.unwrap_err();

        assert!(matches!(err, RepositoryError::DuplicateKey(ref msg) if msg.contains("UNIQUE")));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_foreign_key_enforced() {
        let (store, _) = store_with_university().await;
        let repo = store.students();

        let err = repo.create(john(999)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ForeignKey(_)));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_all_and_missing() {
        let (store, university_id) = store_with_university().await;
        let repo = store.students();
        assert!(repo.get_all().await.unwrap().is_empty());

        repo.create(john(university_id)).await.unwrap();
        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].university.name, "Tech University");

        let err = repo.get_by_id(999).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(Entity::Student)));
    }
}
