use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use strum_macros::{Display, EnumIter};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Attendance {
    pub id: i64,
    pub student_id: i64,
    pub date: NaiveDate,
    pub status: String,
}

/// Statuses offered by the daily view. The column itself is free text and
/// accepts any string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AttendanceEntry {
    #[schema(example = 1)]
    pub student_id: i64,
    #[schema(example = "Present")]
    pub status: String,
}

impl Attendance {
    /// Inserts every entry dated `date` in one transaction. The first failing
    /// row (e.g. an unknown student) rolls back the whole batch.
    pub async fn insert_batch(
        pool: &SqlitePool,
        entries: &[AttendanceEntry],
        date: NaiveDate,
    ) -> Result<Vec<Attendance>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut inserted = Vec::with_capacity(entries.len());

        for entry in entries {
            let row = sqlx::query_as::<_, Attendance>(
                r#"
                INSERT INTO attendance (student_id, date, status)
                VALUES (?, ?, ?)
                RETURNING id, student_id, date, status
                "#,
            )
            .bind(entry.student_id)
            .bind(date)
            .bind(&entry.status)
            .fetch_one(&mut *tx)
            .await?;
            inserted.push(row);
        }

        tx.commit().await?;
        Ok(inserted)
    }

    #[cfg(test)]
    pub async fn list_for_student(
        pool: &SqlitePool,
        student_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Attendance>, sqlx::Error> {
        sqlx::query_as::<_, Attendance>(
            r#"
            SELECT id, student_id, date, status
            FROM attendance
            WHERE student_id = ? AND date = ?
            ORDER BY id
            "#,
        )
        .bind(student_id)
        .bind(date)
        .fetch_all(pool)
        .await
    }

    #[cfg(test)]
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM attendance")
            .fetch_one(pool)
            .await
    }
}
