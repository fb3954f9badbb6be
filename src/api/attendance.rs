use crate::{
    error::AppError,
    model::attendance::{Attendance, AttendanceEntry},
};
use actix_web::{HttpResponse, web};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::info;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct AttendanceRequest {
    pub attendance: Vec<AttendanceEntry>,
}

/// Record today's attendance
#[utoipa::path(
    post,
    path = "/attendance",
    request_body(
        content = AttendanceRequest,
        description = "One entry per student",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Attendance recorded", body = Object, example = json!({
            "message": "Attendance recorded successfully!"
        })),
        (status = 500, description = "Malformed payload or unknown student; nothing is recorded", body = Object, example = json!({
            "message": "Internal Server Error"
        }))
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<AttendanceRequest>,
) -> Result<HttpResponse, AppError> {
    let today = Local::now().date_naive();

    let rows = Attendance::insert_batch(pool.get_ref(), &payload.attendance, today).await?;
    info!(inserted = rows.len(), date = %today, "Attendance recorded");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Attendance recorded successfully!"
    })))
}

#[cfg(test)]
mod tests {
    use crate::db::test_pool;
    use crate::model::attendance::Attendance;
    use crate::model::class::Class;
    use crate::model::student::{NewStudent, Student};
    use crate::routes;
    use actix_web::{App, http::StatusCode, test, web::Data};
    use chrono::Local;
    use serde_json::{Value, json};
    use sqlx::SqlitePool;

    async fn seed_student(pool: &SqlitePool) -> i64 {
        let class_id = Class::insert(pool, "Math").await.unwrap().id;
        Student::insert(pool, NewStudent { name: "Ann", email: None, class_id })
            .await
            .unwrap()
            .id
    }

    #[actix_web::test]
    async fn records_one_row_for_today() {
        let pool = test_pool().await;
        let ann = seed_student(&pool).await;
        let app = test::init_service(
            App::new().app_data(Data::new(pool.clone())).configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/attendance")
            .set_json(json!({ "attendance": [{ "student_id": ann, "status": "Present" }] }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "message": "Attendance recorded successfully!" }));

        let today = Local::now().date_naive();
        let rows = Attendance::list_for_student(&pool, ann, today).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, "Present");
        assert_eq!(Attendance::count(&pool).await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn same_day_duplicates_are_kept() {
        let pool = test_pool().await;
        let ann = seed_student(&pool).await;
        let app = test::init_service(
            App::new().app_data(Data::new(pool.clone())).configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/attendance")
            .set_json(json!({ "attendance": [
                { "student_id": ann, "status": "Present" },
                { "student_id": ann, "status": "Absent" }
            ] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let today = Local::now().date_naive();
        let statuses: Vec<String> = Attendance::list_for_student(&pool, ann, today)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.status)
            .collect();
        assert_eq!(statuses, ["Present", "Absent"]);
    }

    #[actix_web::test]
    async fn unknown_student_fails_whole_request() {
        let pool = test_pool().await;
        let ann = seed_student(&pool).await;
        let app = test::init_service(
            App::new().app_data(Data::new(pool.clone())).configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/attendance")
            .set_json(json!({ "attendance": [
                { "student_id": ann, "status": "Present" },
                { "student_id": 9999, "status": "Present" }
            ] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(Attendance::count(&pool).await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn malformed_payload_is_a_server_error() {
        let pool = test_pool().await;
        let app = test::init_service(
            App::new().app_data(Data::new(pool.clone())).configure(routes::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/attendance")
            .set_json(json!({ "entries": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(Attendance::count(&pool).await.unwrap(), 0);
    }
}
