use crate::{error::AppError, model::class::Class, views};
use actix_web::{HttpResponse, http::header::ContentType, web};
use sqlx::SqlitePool;

pub async fn index(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let classes = Class::list_all(pool.get_ref()).await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(views::index_page(&classes)))
}

pub async fn admin(pool: web::Data<SqlitePool>) -> Result<HttpResponse, AppError> {
    let classes = Class::list_all(pool.get_ref()).await?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(views::admin_page(&classes)))
}

pub async fn script() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(views::SCRIPT_JS)
}
