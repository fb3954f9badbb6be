use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub class_id: i64,
}

/// The shape returned by `GET /students/{class_id}`.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema, PartialEq)]
pub struct StudentSummary {
    #[schema(example = 7)]
    pub id: i64,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
}

pub struct NewStudent<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub class_id: i64,
}

impl Student {
    /// An unknown class id yields an empty list, not an error.
    pub async fn list_by_class(
        pool: &SqlitePool,
        class_id: i64,
    ) -> Result<Vec<StudentSummary>, sqlx::Error> {
        sqlx::query_as::<_, StudentSummary>(
            "SELECT id, name FROM students WHERE class_id = ? ORDER BY id",
        )
        .bind(class_id)
        .fetch_all(pool)
        .await
    }

    /// Fails on an unknown class id or an email already in use.
    pub async fn insert(pool: &SqlitePool, student: NewStudent<'_>) -> Result<Student, sqlx::Error> {
        sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, email, class_id)
            VALUES (?, ?, ?)
            RETURNING id, name, email, class_id
            "#,
        )
        .bind(student.name)
        .bind(student.email)
        .bind(student.class_id)
        .fetch_one(pool)
        .await
    }

    #[cfg(test)]
    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>("SELECT id, name, email, class_id FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
