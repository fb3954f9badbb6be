use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Class {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Grade 5 Mathematics")]
    pub name: String,
}

impl Class {
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Class>, sqlx::Error> {
        sqlx::query_as::<_, Class>("SELECT id, name FROM classes ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn insert(pool: &SqlitePool, name: &str) -> Result<Class, sqlx::Error> {
        sqlx::query_as::<_, Class>("INSERT INTO classes (name) VALUES (?) RETURNING id, name")
            .bind(name)
            .fetch_one(pool)
            .await
    }

    #[cfg(test)]
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM classes")
            .fetch_one(pool)
            .await
    }
}
