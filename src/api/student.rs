use crate::{error::AppError, model::student::Student};
use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;

/// List students of a class
#[utoipa::path(
    get,
    path = "/students/{class_id}",
    params(
        ("class_id" = i64, Path, description = "Class ID")
    ),
    responses(
        (status = 200, description = "Students of the class, empty if none", body = [crate::model::student::StudentSummary]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Students"
)]
pub async fn list_students(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let class_id = path.into_inner();
    let students = Student::list_by_class(pool.get_ref(), class_id).await?;

    tracing::debug!(class_id, count = students.len(), "Listed students");
    Ok(HttpResponse::Ok().json(students))
}
