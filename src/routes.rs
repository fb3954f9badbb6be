use crate::{
    api::{admin, attendance, pages, student},
    error::AppError,
};
use actix_web::{error::InternalError, web};

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Bad attendance bodies are server errors like any other failed write.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Payload(err.to_string()).into()),
    );

    cfg.service(web::resource("/").route(web::get().to(pages::index)))
        .service(web::resource("/static/script.js").route(web::get().to(pages::script)))
        .service(web::resource("/students/{class_id}").route(web::get().to(student::list_students)))
        .service(web::resource("/attendance").route(web::post().to(attendance::mark_attendance)))
        .service(
            web::scope("/admin")
                // An unreadable admin form is ignored like an empty one.
                .app_data(web::FormConfig::default().error_handler(|err, _req| {
                    InternalError::from_response(err, admin::back_to_admin()).into()
                }))
                // /admin
                .service(web::resource("").route(web::get().to(pages::admin)))
                // /admin/add_class
                .service(web::resource("/add_class").route(web::post().to(admin::add_class)))
                // /admin/add_student
                .service(web::resource("/add_student").route(web::post().to(admin::add_student))),
        );
}
