use crate::api::admin::{AddClassForm, AddStudentForm};
use crate::api::attendance::AttendanceRequest;
use crate::model::attendance::AttendanceEntry;
use crate::model::class::Class;
use crate::model::student::StudentSummary;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Tracker API",
        version = "0.1.0",
        description = r#"
## Classroom Attendance Tracker

Create classes, enroll students and mark each student Present or Absent for the day.

- `GET /` and `GET /admin` render HTML pages
- `GET /students/{class_id}` lists a class's students
- `POST /attendance` records today's attendance in one batch
"#,
    ),
    paths(
        crate::api::student::list_students,
        crate::api::attendance::mark_attendance,
        crate::api::admin::add_class,
        crate::api::admin::add_student
    ),
    components(
        schemas(
            Class,
            StudentSummary,
            AttendanceEntry,
            AttendanceRequest,
            AddClassForm,
            AddStudentForm
        )
    ),
    tags(
        (name = "Students", description = "Student listing"),
        (name = "Attendance", description = "Daily attendance"),
        (name = "Admin", description = "Class and student creation"),
    )
)]
pub struct ApiDoc;
