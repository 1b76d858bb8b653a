//! University persistence.

use std::collections::HashMap;

use sqlx::SqlitePool;

use super::error::{RepositoryError, Result};
use crate::model::{
    Entity, EntityId, NewUniversity, Student, University, UniversityUpdate,
    UniversityWithStudents,
};

const SELECT_UNIVERSITY: &str = "SELECT id, name, location FROM universities";
const SELECT_STUDENT: &str = "\
SELECT id, faculty_number, first_name, middle_name, last_name, university_id FROM students";

/// CRUD over the `universities` table.
#[derive(Debug, Clone)]
pub struct UniversityRepository {
    pool: SqlitePool,
}

impl UniversityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a university. A fresh row has no students yet.
    pub async fn create(&self, new: NewUniversity) -> Result<UniversityWithStudents> {
        let university = sqlx::query_as::<_, University>(
            "INSERT INTO universities (name, location) VALUES (?1, ?2) \
             RETURNING id, name, location",
        )
        .bind(&new.name)
        .bind(&new.location)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(university_id = university.id, "University created");
        Ok(UniversityWithStudents::new(university, Vec::new()))
    }

    /// Every university with its students.
    pub async fn get_all(&self) -> Result<Vec<UniversityWithStudents>> {
        let universities =
            sqlx::query_as::<_, University>(&format!("{SELECT_UNIVERSITY} ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;

        let mut by_university: HashMap<EntityId, Vec<Student>> = HashMap::new();
        let students = sqlx::query_as::<_, Student>(&format!("{SELECT_STUDENT} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        for student in students {
            by_university
                .entry(student.university_id)
                .or_default()
                .push(student);
        }

        Ok(universities
            .into_iter()
            .map(|university| {
                let students = by_university.remove(&university.id).unwrap_or_default();
                UniversityWithStudents::new(university, students)
            })
            .collect())
    }

    /// Plain row lookup, no related rows.
    pub async fn find(&self, id: EntityId) -> Result<Option<University>> {
        let university =
            sqlx::query_as::<_, University>(&format!("{SELECT_UNIVERSITY} WHERE id = ?1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(university)
    }

    pub async fn exists(&self, id: EntityId) -> Result<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM universities WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<UniversityWithStudents> {
        let university = self
            .find(id)
            .await?
            .ok_or(RepositoryError::NotFound(Entity::University))?;
        self.with_students(university).await
    }

    /// Apply the present fields of `update` and return the merged record.
    pub async fn update(
        &self,
        id: EntityId,
        update: UniversityUpdate,
    ) -> Result<UniversityWithStudents> {
        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        let university = sqlx::query_as::<_, University>(
            "UPDATE universities \
             SET name = COALESCE(?1, name), location = COALESCE(?2, location) \
             WHERE id = ?3 \
             RETURNING id, name, location",
        )
        .bind(update.name)
        .bind(update.location)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound(Entity::University))?;

        tracing::debug!(university_id = id, "University updated");
        self.with_students(university).await
    }

    /// Remove a university that no student references.
    pub async fn delete(&self, id: EntityId) -> Result<()> {
        // Enrolled students trip the ON DELETE RESTRICT key.
        let result = sqlx::query("DELETE FROM universities WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| match RepositoryError::from(err) {
                RepositoryError::ForeignKey(_) => RepositoryError::HasDependents(id),
                other => other,
            })?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(Entity::University));
        }

        tracing::debug!(university_id = id, "University deleted");
        Ok(())
    }

    async fn with_students(&self, university: University) -> Result<UniversityWithStudents> {
        let students = sqlx::query_as::<_, Student>(&format!(
            "{SELECT_STUDENT} WHERE university_id = ?1 ORDER BY id"
        ))
        .bind(university.id)
        .fetch_all(&self.pool)
        .await?;
        Ok(UniversityWithStudents::new(university, students))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::model::NewStudent;
    use crate::store::Store;

    async fn store() -> Store {
        Store::open(&DatabaseConfig::in_memory()).await.unwrap()
    }

    fn tech() -> NewUniversity {
        NewUniversity {
            name: "Tech University".into(),
            location: "Boston".into(),
        }
    }

    fn student(faculty_number: &str, university_id: EntityId) -> NewStudent {
        NewStudent {
            faculty_number: faculty_number.into(),
            first_name: "John".into(),
            middle_name: None,
            last_name: "Doe".into(),
            university_id,
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = store().await;
        let repo = store.universities();

        let created = repo.create(tech()).await.unwrap();
        assert_eq!(created.university.id, 1);
        assert!(created.students.is_empty());

        let fetched = repo.get_by_id(created.university.id).await.unwrap();
        assert_eq!(fetched, created);
        assert!(repo.exists(1).await.unwrap());
        assert!(!repo.exists(2).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = store().await;
        let err = store.universities().get_by_id(42).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(Entity::University)));
    }

    #[tokio::test]
    async fn test_get_all_groups_students() {
        let store = store().await;
        let repo = store.universities();
        let first = repo.create(tech()).await.unwrap().university.id;
        let second = repo
            .create(NewUniversity {
                name: "Sofia University".into(),
                location: "Sofia".into(),
            })
            .await
            .unwrap()
            .university
            .id;

        store.students().create(student("FN001", first)).await.unwrap();
        store.students().create(student("FN002", second)).await.unwrap();
        store.students().create(student("FN003", first)).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        let numbers: Vec<_> = all[0]
            .students
            .iter()
            .map(|s| s.faculty_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["FN001", "FN003"]);
        assert_eq!(all[1].students.len(), 1);
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let store = store().await;
        let repo = store.universities();
        let id = repo.create(tech()).await.unwrap().university.id;

        let updated = repo
            .update(
                id,
                UniversityUpdate {
                    name: None,
                    location: Some("Cambridge".into()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.university.name, "Tech University");
        assert_eq!(updated.university.location, "Cambridge");

        let unchanged = repo.update(id, UniversityUpdate::default()).await.unwrap();
        assert_eq!(unchanged, updated);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let store = store().await;
        let err = store
            .universities()
            .update(
                9,
                UniversityUpdate {
                    name: Some("X".into()),
                    location: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(Entity::University)));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = store().await;
        let repo = store.universities();
        let id = repo.create(tech()).await.unwrap().university.id;

        repo.delete(id).await.unwrap();
        assert!(repo.find(id).await.unwrap().is_none());

        let err = repo.delete(id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(Entity::University)));
    }

    #[tokio::test]
    async fn test_delete_rejected_while_students_enrolled() {
        let store = store().await;
        let repo = store.universities();
        let id = repo.create(tech()).await.unwrap().university.id;
        store.students().create(student("FN001", id)).await.unwrap();

        let err = repo.delete(id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::HasDependents(found) if found == id));
        assert!(repo.exists(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = store().await;
        let repo = store.universities();
        let first = repo.create(tech()).await.unwrap().university.id;
        repo.delete(first).await.unwrap();

        let second = repo.create(tech()).await.unwrap().university.id;
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_concurrent_deletes_on_shared_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.sqlite");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            max_connections: 5,
        };
        let store = Store::open(&config).await.unwrap();
        let repo = store.universities();

        let mut ids = Vec::new();
        for _ in 0..10 {
            ids.push(repo.create(tech()).await.unwrap().university.id);
        }

        let mut deletes = tokio::task::JoinSet::new();
        for &id in &ids {
            let repo = repo.clone();
            deletes.spawn(async move { repo.delete(id).await });
        }
        while let Some(outcome) = deletes.join_next().await {
            outcome.unwrap().unwrap();
        }

        for id in ids {
            assert!(repo.find(id).await.unwrap().is_none());
        }
        store.close().await;
    }
}
