use crate::{
    error::AppError,
    model::{
        class::Class,
        student::{NewStudent, Student},
    },
};
use actix_web::{HttpResponse, http::header, web};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::{debug, info};
use utoipa::ToSchema;

/// Every field is optional so a missing one never rejects the form.
#[derive(Deserialize, ToSchema)]
pub struct AddClassForm {
    #[schema(example = "Grade 5 Mathematics")]
    pub class_name: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct AddStudentForm {
    #[schema(example = "Ada Lovelace")]
    pub student_name: Option<String>,
    #[schema(example = "ada@school.test")]
    pub student_email: Option<String>,
    #[schema(example = "1")]
    pub class_id: Option<String>,
}

/// Present and not just whitespace. The value itself is kept as typed.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

pub fn back_to_admin() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/admin"))
        .finish()
}

/// Create a class
#[utoipa::path(
    post,
    path = "/admin/add_class",
    request_body(content = AddClassForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Back to the admin page, created or not"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Admin"
)]
pub async fn add_class(
    pool: web::Data<SqlitePool>,
    form: web::Form<AddClassForm>,
) -> Result<HttpResponse, AppError> {
    let Some(name) = non_empty(&form.class_name) else {
        debug!("add_class without a name, ignored");
        return Ok(back_to_admin());
    };

    let class = Class::insert(pool.get_ref(), name).await?;
    info!(class_id = class.id, name = %class.name, "Class created");

    Ok(back_to_admin())
}

/// Create a student
#[utoipa::path(
    post,
    path = "/admin/add_student",
    request_body(content = AddStudentForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Back to the admin page, created or not"),
        (status = 500, description = "Unknown class or duplicate email")
    ),
    tag = "Admin"
)]
pub async fn add_student(
    pool: web::Data<SqlitePool>,
    form: web::Form<AddStudentForm>,
) -> Result<HttpResponse, AppError> {
    let name = non_empty(&form.student_name);
    let class_id = non_empty(&form.class_id).and_then(|v| v.trim().parse::<i64>().ok());

    let (Some(name), Some(class_id)) = (name, class_id) else {
        debug!("add_student without name or class id, ignored");
        return Ok(back_to_admin());
    };

    let student = NewStudent {
        name,
        email: non_empty(&form.student_email),
        class_id,
    };
    let student = Student::insert(pool.get_ref(), student).await?;
    info!(student_id = student.id, class_id = student.class_id, "Student created");

    Ok(back_to_admin())
}
