use crate::model::attendance::AttendanceStatus;
use crate::model::class::Class;
use strum::IntoEnumIterator;

pub const SCRIPT_JS: &str = include_str!("../static/script.js");

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 720px; margin: 2rem auto; }
table { border-collapse: collapse; width: 100%; }
td, th { border-bottom: 1px solid #ddd; padding: .4rem; text-align: left; }
form { margin-bottom: 1.5rem; }
.hidden { display: none; }
"#;

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>
"#
    )
}

fn class_options(classes: &[Class]) -> String {
    classes
        .iter()
        .map(|class| format!(r#"<option value="{}">{}</option>"#, class.id, escape_html(&class.name)) + "\n")
        .collect()
}

/// Daily view. Student rows are filled in by the script once a class is picked.
pub fn index_page(classes: &[Class]) -> String {
    let headers: String = AttendanceStatus::iter()
        .map(|status| format!("<th>{status}</th>"))
        .collect();

    let body = format!(
        r#"<h1>Mark Attendance</h1>
<p><a href="/admin">Manage classes and students</a></p>
<form id="attendanceForm">
<label for="classSelect">Class</label>
<select id="classSelect">
<option value="">-- Select a class --</option>
{options}</select>
<div id="studentsContainer" class="hidden">
<table id="studentsTable">
<thead><tr><th>Student</th>{headers}</tr></thead>
<tbody></tbody>
</table>
<button type="submit">Submit Attendance</button>
</div>
</form>
<div id="message" class="hidden"></div>
<script src="/static/script.js"></script>"#,
        options = class_options(classes),
    );

    layout("Attendance", &body)
}

pub fn admin_page(classes: &[Class]) -> String {
    let rows: String = if classes.is_empty() {
        r#"<tr><td colspan="2">No classes yet</td></tr>"#.to_string()
    } else {
        classes
            .iter()
            .map(|class| format!("<tr><td>{}</td><td>{}</td></tr>\n", class.id, escape_html(&class.name)))
            .collect()
    };

    let body = format!(
        r#"<h1>Admin</h1>
<p><a href="/">Back to attendance</a></p>
<h2>Classes</h2>
<table>
<thead><tr><th>ID</th><th>Name</th></tr></thead>
<tbody>
{rows}</tbody>
</table>
<h2>Add Class</h2>
<form method="post" action="/admin/add_class">
<input name="class_name" placeholder="Class name" required>
<button type="submit">Add Class</button>
</form>
<h2>Add Student</h2>
<form method="post" action="/admin/add_student">
<input name="student_name" placeholder="Student name" required>
<input name="student_email" type="email" placeholder="Email (optional)">
<select name="class_id" required>
<option value="">-- Class --</option>
{options}</select>
<button type="submit">Add Student</button>
</form>"#,
        options = class_options(classes),
    );

    layout("Admin", &body)
}
